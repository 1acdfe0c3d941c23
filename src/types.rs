use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashMap;

/// Error while extracting books from a response body
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The response body was empty
    #[error("the response body is empty")]
    Empty,

    /// The response body was not valid json
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The top level object had no `items` array
    #[error("the response has no `items` array")]
    MissingItems,
}

/// One entry of a volumes response `items` array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    /// The book data of this volume.
    ///
    /// The api may omit it entirely, in which case it is an empty object here.
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// The `volumeInfo` object of a volume.
///
/// Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeInfo {
    /// The title
    pub title: Option<String>,

    /// The authors
    #[serde(default)]
    pub authors: Vec<String>,

    /// Long-form description
    pub description: Option<String>,

    /// # of pages
    #[serde(rename = "pageCount", default)]
    pub page_count: u32,

    /// Links to cover images
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,

    /// Language code
    pub language: Option<String>,

    /// Link to the preview page
    #[serde(rename = "previewLink")]
    pub preview_link: Option<String>,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// The `imageLinks` object of a volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageLinks {
    /// Url of the small thumbnail
    #[serde(rename = "smallThumbnail")]
    pub small_thumbnail: Option<String>,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// One parsed search result.
///
/// Absent strings are `None` and an absent page count is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Url of the thumbnail image
    pub thumbnail_url: Option<String>,

    /// Url of the preview page
    pub preview_url: Option<String>,

    /// The title
    pub title: Option<String>,

    /// The first listed author. Co-authors are not retained.
    pub author: Option<String>,

    /// # of pages
    pub page_count: u32,

    /// Language code
    pub language: Option<String>,

    /// Long-form description
    pub description: Option<String>,
}

impl From<VolumeInfo> for Book {
    fn from(info: VolumeInfo) -> Self {
        Book {
            thumbnail_url: info.image_links.and_then(|links| links.small_thumbnail),
            preview_url: info.preview_link,
            title: info.title,
            author: info.authors.into_iter().next(),
            page_count: info.page_count,
            language: info.language,
            description: info.description,
        }
    }
}

/// Extract an ordered list of [`Book`]s from a volumes response body.
///
/// Fails if the body is empty, is not json, or the top level object has no
/// `items` array. Anything below that is non-fatal: a missing `volumeInfo` is
/// treated as an empty object, absent fields get their defaults, and an item
/// that fails to deserialize is skipped with a logged warning while the rest
/// of the list is kept.
pub fn extract_books(json: &str) -> Result<Vec<Book>, ParseError> {
    if json.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let envelope: serde_json::Value = serde_json::from_str(json)?;
    let items = envelope
        .get("items")
        .and_then(serde_json::Value::as_array)
        .ok_or(ParseError::MissingItems)?;

    let mut books = Vec::with_capacity(items.len());
    for item in items {
        match Volume::deserialize(item) {
            Ok(volume) => books.push(Book::from(volume.volume_info)),
            Err(error) => {
                tracing::warn!("skipping malformed volume: {}", error);
            }
        }
    }

    Ok(books)
}

#[cfg(test)]
mod test {
    use super::*;

    const SEARCH: &str = include_str!("../test_data/search.json");

    #[test]
    fn parse_search_response() {
        let books = extract_books(SEARCH).expect("failed to extract books");
        assert_eq!(books.len(), 3);

        let first = &books[0];
        assert_eq!(first.title.as_deref(), Some("The Hobbit"));
        assert_eq!(first.author.as_deref(), Some("J. R. R. Tolkien"));
        assert_eq!(first.page_count, 322);
        assert_eq!(first.language.as_deref(), Some("en"));
        assert!(first.thumbnail_url.is_some());
        assert!(first.preview_url.is_some());
        assert!(first.description.is_some());
    }

    #[test]
    fn minimal_item() {
        let books = extract_books(r#"{"items":[{"volumeInfo":{"title":"A","pageCount":100}}]}"#)
            .expect("failed to extract books");
        assert_eq!(books.len(), 1);
        assert_eq!(
            books[0],
            Book {
                thumbnail_url: None,
                preview_url: None,
                title: Some("A".to_string()),
                author: None,
                page_count: 100,
                language: None,
                description: None,
            }
        );
    }

    #[test]
    fn only_first_author_is_kept() {
        let books = extract_books(r#"{"items":[{"volumeInfo":{"authors":["X","Y"]}}]}"#)
            .expect("failed to extract books");
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author.as_deref(), Some("X"));
    }

    #[test]
    fn missing_volume_info_is_an_empty_record() {
        let books = extract_books(r#"{"items":[{"id":"abc"}]}"#).expect("failed to extract books");
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, None);
        assert_eq!(books[0].page_count, 0);
    }

    #[test]
    fn empty_body() {
        let error = extract_books("").expect_err("empty body should not parse");
        assert!(matches!(error, ParseError::Empty));

        let error = extract_books("  \n ").expect_err("blank body should not parse");
        assert!(matches!(error, ParseError::Empty));
    }

    #[test]
    fn invalid_json() {
        let error = extract_books("not json").expect_err("garbage should not parse");
        assert!(matches!(error, ParseError::Json(_)));
    }

    #[test]
    fn missing_items() {
        let error = extract_books(r#"{"noitems":[]}"#).expect_err("missing items should fail");
        assert!(matches!(error, ParseError::MissingItems));

        let error = extract_books(r#"{"items":5}"#).expect_err("non-array items should fail");
        assert!(matches!(error, ParseError::MissingItems));
    }

    #[test]
    fn malformed_item_is_skipped() {
        let books = extract_books(
            r#"{"items":[{"volumeInfo":{"title":"A"}},{"volumeInfo":{"pageCount":"many"}},{"volumeInfo":{"title":"B"}}]}"#,
        )
        .expect("failed to extract books");
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title.as_deref(), Some("A"));
        assert_eq!(books[1].title.as_deref(), Some("B"));
    }

    #[test]
    fn one_record_per_item_in_order() {
        let books = extract_books(
            r#"{
                "items": [
                    {"volumeInfo":{"title":"1"}},
                    {"volumeInfo":{"language":"de"}},
                    {"volumeInfo":{}},
                    {"volumeInfo":{"previewLink":"http://example.com/4"}}
                ]
            }"#,
        )
        .expect("failed to extract books");
        assert_eq!(books.len(), 4);
        assert_eq!(books[0].title.as_deref(), Some("1"));
        assert_eq!(books[1].language.as_deref(), Some("de"));
        assert_eq!(books[2], Book::from(VolumeInfo::default()));
        assert_eq!(
            books[3].preview_url.as_deref(),
            Some("http://example.com/4")
        );
    }
}
