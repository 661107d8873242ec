// HTTP client for the books listing endpoint

use std::time::Duration;

use serde::Deserialize;

/// The single failure kind surfaced by a fetch; variants only record why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("request timed out")]
    Timeout,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchFailure::Timeout
        } else if let Some(status) = e.status() {
            FetchFailure::Status(status.as_u16())
        } else {
            FetchFailure::Network(e.to_string())
        }
    }
}

#[derive(Clone, Debug)]
pub struct BooksClient {
    url: String,
    client: reqwest::Client,
}

impl BooksClient {
    /// Create a client for the listing endpoint (e.g. "https://dev.iqrakitab.net/api/books").
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let url = url.into();
        tracing::debug!(%url, ?timeout, "creating BooksClient");
        Ok(BooksClient { url, client })
    }

    /// Return a client that sends requests through the provided reqwest client
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// GET the listing endpoint. No query, no auth.
    #[tracing::instrument(level = "debug", skip(self), fields(url = %self.url))]
    pub async fn get_books(&self) -> Result<Vec<BookDto>, FetchFailure> {
        tracing::debug!("GET books");
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.error_for_status()?;
        let body = status.text().await?;
        let books = parse_books_envelope(&body);
        tracing::info!(count = books.len(), "fetched books");
        Ok(books)
    }
}

/// Extract the `data` list from a response body. Anything that is not
/// `{ "data": [...] }` yields an empty list; elements that fail to decode are skipped.
pub fn parse_books_envelope(body: &str) -> Vec<BookDto> {
    let envelope: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            let snippet_len = body.len().min(200);
            let snippet = body.get(..snippet_len).unwrap_or_default();
            tracing::warn!(error = %e, body_snippet = %snippet, "books response is not JSON");
            return Vec::new();
        }
    };

    let Some(items) = envelope.get("data").and_then(|d| d.as_array()) else {
        tracing::warn!("books response has no `data` array");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| match BookDto::deserialize(item) {
            Ok(book) => Some(book),
            Err(e) => {
                tracing::warn!(error = %e, index = idx, "skipping malformed book entry");
                None
            }
        })
        .collect()
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorDto>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub is_arabic: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_photo_uri: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
