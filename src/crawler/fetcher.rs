//! HTTP fetcher implementation
//!
//! This module handles every HTTP request made by a run:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests for page content
//! - Classifying failures into [`FetchError`] values
//!
//! Fetching goes through the [`PageFetcher`] trait so the enricher and the
//! pipeline can run against something other than the network.

use crate::config::FetchConfig;
use crate::crawler::document::Document;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;

/// Source of page bodies
///
/// A single failed fetch is reported as a [`FetchError`], never as a panic,
/// so callers can turn it into data.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieves the body of the page at `url`
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use link_harvest::config::FetchConfig;
/// use link_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`PageFetcher`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher around an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from configuration and wraps it
    pub fn from_config(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        fetch_url(&self.client, url).await
    }
}

/// Fetches a URL with a single GET request
///
/// # Failure Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Non-2xx status | `FetchError::Status` |
/// | Timeout | `FetchError::Timeout` |
/// | Connection refused, DNS, TLS | `FetchError::Connect` |
/// | Any other request error | `FetchError::Request` |
/// | Body cannot be read or decoded | `FetchError::Body` |
///
/// No retries are made.
pub async fn fetch_url(client: &Client, url: &str) -> Result<String, FetchError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    })
}

/// Maps a `reqwest` send error onto a [`FetchError`]
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// Fetches a page and parses it into a [`Document`]
pub async fn fetch_document(fetcher: &dyn PageFetcher, url: &str) -> Result<Document, FetchError> {
    let body = fetcher.fetch_page(url).await?;
    Ok(Document::parse(&body))
}
