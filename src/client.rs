use crate::{
    query::build_query,
    types::extract_books,
    Book,
    Error,
};
use std::time::Duration;
use url::Url;

const DEFAULT_USER_AGENT: &str = "google-books-rs";

/// Client for the google books volumes api
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,
}

impl Client {
    /// Make a new client
    pub fn new() -> Self {
        Client {
            // reqwest has no separate read timeout; the 10 s request
            // deadline stands in for the read budget and also caps time
            // spent connecting, so the connect timeout only matters if
            // the deadline is ever raised above it.
            client: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(15))
                .timeout(Duration::from_secs(10))
                .user_agent(DEFAULT_USER_AGENT)
                .build()
                .expect("failed to build client"),
        }
    }

    /// Search volumes by title and author.
    ///
    /// Either input may be empty, in which case its clause is omitted from
    /// the query. `max_results` is sent verbatim; the api accepts values
    /// between 1 and 40.
    ///
    /// One GET request per call, no retries. The returned list has one entry
    /// per well-formed item of the response, in response order.
    pub async fn search(
        &self,
        title: &str,
        author: &str,
        max_results: &str,
    ) -> Result<Vec<Book>, Error> {
        let url = Url::parse(&build_query(title, author, max_results))?;

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::InvalidStatus(status));
        }
        let body = response.text().await?;

        Ok(extract_books(&body)?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
