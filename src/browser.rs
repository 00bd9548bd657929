/// Opening book pages in the system browser
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("cannot open {url}: {source}")]
pub struct OpenError {
    pub url: String,
    #[source]
    pub source: std::io::Error,
}

/// Builds book page links and hands them to the platform launcher
#[derive(Debug, Clone)]
pub struct ExternalLinkOpener {
    host: String,
}

impl ExternalLinkOpener {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Page URL for a volume ID. The ID is embedded as-is.
    pub fn book_url(&self, id: &str) -> String {
        format!(
            "http://{}/books?id={}&printsec=frontcover&dq=book&hl=&cd=1&source=gbs_api",
            self.host, id
        )
    }

    /// Open the page for `id` in the default browser
    pub fn open(&self, id: &str) -> Result<(), OpenError> {
        let url = self.book_url(id);
        info!("🌐 Opening {}", url);
        open::that(&url).map_err(|source| OpenError { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_url() {
        let opener = ExternalLinkOpener::new("books.google.kg");
        assert_eq!(
            opener.book_url("X1"),
            "http://books.google.kg/books?id=X1&printsec=frontcover&dq=book&hl=&cd=1&source=gbs_api"
        );
    }

    #[test]
    fn test_book_url_uses_host() {
        let opener = ExternalLinkOpener::new("books.example.org");
        assert!(opener.book_url("abc").starts_with("http://books.example.org/books?id=abc&"));
    }
}
