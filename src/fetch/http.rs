// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key functionality:
// - The Fetcher trait: the seam between the crawler and the network
// - HttpFetcher: the real implementation, backed by reqwest
// - Sorting reqwest failures into our FetchError kinds
//
// Rust concepts:
// - Traits: So tests can hand the crawler a fake network
// - async-trait: Traits can't easily hold async fns behind generics without it
// - Result<T, E>: With our own error enum as E
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::FetchError;

// What a successful fetch hands back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// HTTP status code of the response
    pub status: u16,
    /// The raw response text (HTML, usually)
    pub body: String,
}

impl Page {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

// Anything that can turn a URL into a Page
//
// The crawler is generic over this trait. In production it is an HttpFetcher,
// in tests it is a table of canned responses.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Page, FetchError>;
}

// Fetches pages with a shared reqwest client
//
// The client is reused for every request (connection pooling).
// The timeout is passed per request so the crawler decides it.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub const USER_AGENT: &'static str = concat!("page-indexer/", env!("CARGO_PKG_VERSION"));

    pub fn new() -> anyhow::Result<Self> {
        Self::with_user_agent(Self::USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Page, FetchError> {
        let parsed = Url::parse(url)
            .map_err(|e| FetchError::InvalidUrl(format!("Invalid URL '{}': {}", url, e)))?;

        // reqwest only speaks HTTP
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::InvalidUrl(format!(
                "Unsupported scheme '{}' in {}",
                parsed.scheme(),
                url
            )));
        }

        let response = self
            .client
            .get(parsed)
            .timeout(timeout)
            .send()
            .await
            .map_err(categorize_error)?;

        // An error status still has a body worth indexing
        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "non-success status");
        }

        let body = response.text().await.map_err(categorize_error)?;
        Ok(Page::new(status.as_u16(), body))
    }
}

// Sorts a reqwest error into one of our kinds
//
// Order matters: a timed out request can also report is_request().
fn categorize_error(error: reqwest::Error) -> FetchError {
    let message = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout(message)
    } else if error.is_builder() {
        FetchError::InvalidUrl(message)
    } else if error.is_decode() {
        FetchError::Decode(message)
    } else {
        FetchError::Transport(message)
    }
}
