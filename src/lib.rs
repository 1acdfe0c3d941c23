mod client;
pub mod query;
pub mod types;

pub use crate::{
    client::Client,
    query::build_query,
    types::{
        extract_books,
        Book,
        ParseError,
    },
};
pub use url::Url;

/// Library result type
pub type BooksResult<T> = Result<T, Error>;

/// Library error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reqwest HTTP error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Invalid HTTP status
    #[error("invalid status {0}")]
    InvalidStatus(reqwest::StatusCode),

    /// The query did not form a valid url
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The response body could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}
