/// Catalog response shapes and the mapping into `Book`
///
/// The response format belongs to the remote service, so every field is
/// optional here. Items are kept as raw JSON until mapping so one malformed
/// entry cannot fail the whole batch.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::state::data::Book;

/// Top-level search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawApiResponse {
    /// Absent when the query has no hits
    #[serde(default)]
    pub items: Vec<Value>,
}

/// One volume as returned by the catalog
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    id: Option<String>,
    volume_info: Option<VolumeInfo>,
    preview_link: Option<PreviewLink>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreviewLink {
    preview_link: Option<String>,
}

/// Why a single item could not become a `Book`
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("malformed item: {0}")]
    Malformed(String),
}

impl RawApiResponse {
    /// Parse a response body
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Convert a raw response into books, in input order.
///
/// Items that fail to map are dropped; the rest are still returned.
pub fn map(raw: &RawApiResponse) -> Vec<Book> {
    raw.items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match map_item(item) {
            Ok(book) => Some(book),
            Err(e) => {
                debug!("Dropping item {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Map one raw item
pub fn map_item(item: &Value) -> Result<Book, MapError> {
    let raw = RawItem::deserialize(item).map_err(|e| MapError::Malformed(e.to_string()))?;

    let id = raw.id.ok_or(MapError::MissingField("id"))?;
    let info = raw.volume_info.ok_or(MapError::MissingField("volumeInfo"))?;
    let title = info.title.ok_or(MapError::MissingField("title"))?;

    let author = info
        .authors
        .and_then(|authors| authors.into_iter().next())
        .unwrap_or_default();
    let image_url = info
        .image_links
        .and_then(|links| links.thumbnail)
        .unwrap_or_default();
    let book_url = raw
        .preview_link
        .and_then(|link| link.preview_link)
        .unwrap_or_default();

    Ok(Book {
        id,
        title,
        author,
        image_url,
        book_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawApiResponse {
        RawApiResponse::from_slice(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_full_item() {
        let raw = parse(
            r#"{"items":[{"id":"X1","volumeInfo":{"title":"Dune","authors":["Frank Herbert"],"imageLinks":{"thumbnail":"http://img/x1.png"}},"previewLink":{"previewLink":"http://preview/x1"}}]}"#,
        );

        assert_eq!(
            map(&raw),
            vec![Book {
                id: "X1".into(),
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                image_url: "http://img/x1.png".into(),
                book_url: "http://preview/x1".into(),
            }]
        );
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let raw = parse(r#"{"items":[{"id":"X2","volumeInfo":{"title":"Foo"}}]}"#);

        assert_eq!(
            map(&raw),
            vec![Book {
                id: "X2".into(),
                title: "Foo".into(),
                author: String::new(),
                image_url: String::new(),
                book_url: String::new(),
            }]
        );
    }

    #[test]
    fn test_empty_author_list() {
        let raw = parse(
            r#"{"items":[{"id":"X3","volumeInfo":{"title":"Anon","authors":[],"imageLinks":{}}}]}"#,
        );
        let books = map(&raw);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "");
        assert_eq!(books[0].image_url, "");
    }

    #[test]
    fn test_only_first_author_kept() {
        let raw = parse(
            r#"{"items":[{"id":"G","volumeInfo":{"title":"Good Omens","authors":["Terry Pratchett","Neil Gaiman"]}}]}"#,
        );
        assert_eq!(map(&raw)[0].author, "Terry Pratchett");
    }

    #[test]
    fn test_missing_title_is_dropped_without_aborting() {
        let raw = parse(
            r#"{"items":[
                {"id":"A","volumeInfo":{"title":"First"}},
                {"id":"B","volumeInfo":{"authors":["Nobody"]}},
                {"id":"C","volumeInfo":{"title":"Third"}}
            ]}"#,
        );

        let ids: Vec<_> = map(&raw).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_malformed_items_are_dropped() {
        let raw = parse(
            r#"{"items":[
                {"id":"A","volumeInfo":{"title":42}},
                "not an object",
                {"volumeInfo":{"title":"No id"}},
                {"id":"D"},
                {"id":"E","volumeInfo":{"title":"Kept"}}
            ]}"#,
        );

        let books = map(&raw);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "E");
    }

    #[test]
    fn test_map_item_errors() {
        let missing_title: Value = serde_json::json!({"id": "B", "volumeInfo": {}});
        assert_eq!(map_item(&missing_title), Err(MapError::MissingField("title")));

        let missing_id: Value = serde_json::json!({"volumeInfo": {"title": "T"}});
        assert_eq!(map_item(&missing_id), Err(MapError::MissingField("id")));

        let wrong_type: Value = serde_json::json!({"id": 7});
        assert!(matches!(map_item(&wrong_type), Err(MapError::Malformed(_))));
    }

    #[test]
    fn test_order_preserved() {
        let raw = parse(
            r#"{"items":[
                {"id":"3","volumeInfo":{"title":"c"}},
                {"id":"1","volumeInfo":{"title":"a"}},
                {"id":"2","volumeInfo":{"title":"b"}},
                {"id":"1","volumeInfo":{"title":"a"}}
            ]}"#,
        );

        let ids: Vec<_> = map(&raw).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["3", "1", "2", "1"]);
    }

    #[test]
    fn test_mapping_is_repeatable() {
        let raw = parse(
            r#"{"items":[{"id":"X1","volumeInfo":{"title":"Dune","authors":["Frank Herbert"]}},{"id":"X2"}]}"#,
        );
        assert_eq!(map(&raw), map(&raw));
    }

    #[test]
    fn test_missing_items_is_empty() {
        let raw = parse(r#"{"kind":"books#volumes","totalItems":0}"#);
        assert!(map(&raw).is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let raw = parse(
            r#"{"kind":"books#volumes","items":[{"kind":"books#volume","id":"Z","etag":"e","volumeInfo":{"title":"T","pageCount":100}}]}"#,
        );
        assert_eq!(map(&raw).len(), 1);
    }
}
