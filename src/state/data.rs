/// Shared data structures for the application state
///
/// These structs represent the view model that flows between
/// the catalog API layer and the UI layer.

/// A single book as shown in the results grid
///
/// Built by the response mapper, never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Catalog volume ID (used to build the browser link)
    pub id: String,
    /// Volume title
    pub title: String,
    /// First listed author, or empty
    pub author: String,
    /// Thumbnail URL, or empty
    pub image_url: String,
    /// Preview link, or empty
    pub book_url: String,
}

impl Book {
    /// Whether there is a thumbnail worth fetching for this book
    pub fn has_thumbnail(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Whether the catalog offers a preview for this book
    pub fn has_preview(&self) -> bool {
        !self.book_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_thumbnail() {
        let mut book = Book {
            id: "X1".into(),
            title: "Dune".into(),
            author: String::new(),
            image_url: String::new(),
            book_url: String::new(),
        };
        assert!(!book.has_thumbnail());

        book.image_url = "http://img/x1.png".into();
        assert!(book.has_thumbnail());
        assert!(!book.has_preview());

        book.book_url = "http://preview/x1".into();
        assert!(book.has_preview());
    }
}
