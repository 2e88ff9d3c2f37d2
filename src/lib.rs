//! Link-Harvest: an outbound link collector
//!
//! This crate fetches a single page, collects the links it makes to other
//! hosts, visits each of them concurrently to recover a title and description,
//! and writes the result as a Markdown link list.

pub mod config;
pub mod crawler;
pub mod link;
pub mod output;
pub mod progress;
pub mod url;

use thiserror::Error;

/// Main error type for Link-Harvest operations
///
/// Every variant is fatal for a run. Failures on individual outbound links are
/// carried as [`FetchError`] values inside the enricher and never surface here.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid root URL: {0}")]
    Url(#[from] UrlError),

    #[error("Failed to fetch root page {url}: {source}")]
    RootFetch { url: String, source: FetchError },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Failure to retrieve a single page
///
/// The `Display` text is what ends up in the Markdown file as the description
/// of a link that could not be enriched, so it is kept readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Request timed out")]
    Timeout { url: String },

    #[error("Connection failed: {message}")]
    Connect { url: String, message: String },

    #[error("Request failed: {message}")]
    Request { url: String, message: String },

    #[error("Failed to read response body: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    /// Returns the URL the failed request was made against
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Request { url, .. }
            | Self::Body { url, .. } => url,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Link-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Enricher, Pipeline};
pub use link::Link;
pub use crate::url::{extract_domain, external_href, is_external_link};
