/// Application configuration
///
/// All values are compile-time defaults. There are no CLI flags, environment
/// variables or config files; tests build a `Config` pointing at a local server.

/// Catalog search endpoint
const API_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Host serving the human-readable book pages
const BROWSE_HOST: &str = "books.google.kg";

/// Result cap used by every search trigger
const MAX_RESULTS: u32 = 30;

/// Query issued by the "Load books" button
const LOAD_QUERY: &str = "book";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Full URL of the volumes search endpoint
    pub api_endpoint: String,
    /// Host used to build browser links
    pub browse_host: String,
    /// `maxResults` sent with each search
    pub max_results: u32,
    /// Query for the unfiltered "Load books" search
    pub load_query: String,
    /// Grid cell width in logical pixels
    pub card_width: f32,
    /// Decoded thumbnails larger than this (either side) are scaled down
    pub thumbnail_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: API_ENDPOINT.to_string(),
            browse_host: BROWSE_HOST.to_string(),
            max_results: MAX_RESULTS,
            load_query: LOAD_QUERY.to_string(),
            card_width: 160.0,
            thumbnail_size: 256,
        }
    }
}

impl Config {
    /// Same defaults, different search endpoint
    #[cfg(test)]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}
