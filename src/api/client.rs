use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

use super::response::{self, RawApiResponse};
use crate::state::data::Book;

/// Failure of a catalog search
///
/// Carries rendered messages rather than the underlying errors so it can be
/// passed around in (cloneable) UI messages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("catalog responded with HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Body(String),
}

/// Client for the catalog volumes endpoint
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BookSearchClient {
    http: Client,
    endpoint: String,
}

impl BookSearchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The shared HTTP client (also used for thumbnail downloads)
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Build the search request without sending it.
    /// The query is percent-encoded as a URL parameter.
    pub fn request(&self, query: &str, max_results: u32) -> Result<reqwest::Request, SearchError> {
        self.http
            .get(&self.endpoint)
            .query(&[("q", query)])
            .query(&[("maxResults", max_results)])
            .build()
            .map_err(|e| SearchError::Request(e.to_string()))
    }

    /// Run a search and return the raw response
    pub async fn search(&self, query: &str, max_results: u32) -> Result<RawApiResponse, SearchError> {
        let request = self.request(query, max_results)?;
        info!("🔍 Searching catalog: {}", request.url());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog search for {:?} failed: {}", query, status);
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        RawApiResponse::from_slice(&body).map_err(|e| SearchError::Body(e.to_string()))
    }
}

/// Search and map in one step; the pipeline every search trigger goes through
pub async fn search_books(
    client: BookSearchClient,
    query: String,
    max_results: u32,
) -> Result<Vec<Book>, SearchError> {
    let raw = client.search(&query, max_results).await?;
    let books = response::map(&raw);

    info!(
        "📚 Search {:?}: {} items, {} books",
        query,
        raw.items.len(),
        books.len()
    );

    Ok(books)
}
