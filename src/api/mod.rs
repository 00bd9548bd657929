/// Catalog API module
///
/// This module handles:
/// - Searching the remote catalog (client.rs)
/// - Mapping raw responses into books (response.rs)
/// - Downloading and decoding thumbnails (thumbnail.rs)

pub mod client;
pub mod response;
pub mod thumbnail;

pub use client::{search_books, BookSearchClient, SearchError};
pub use thumbnail::ThumbnailError;
