use serde::Deserialize;
use std::time::Duration;

/// Browser user agent sent with every request; some sites refuse the
/// defaults of HTTP libraries.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36 Edg/91.0.864.37";

/// File the link list is written to when nothing else is configured
pub const DEFAULT_OUTPUT_PATH: &str = "links.md";

/// Main configuration structure for Link-Harvest
///
/// Every section is optional; a missing file section falls back to
/// [`Default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub links: LinksConfig,
    pub output: OutputConfig,
}

/// HTTP fetching configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total time allowed for one request, in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Time allowed to establish a connection, in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Upper bound on fetches in flight during enrichment (unbounded if absent)
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: Option<usize>,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_concurrent_fetches: None,
        }
    }
}

/// Link collection configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Keep only the first occurrence of each href
    pub dedupe: bool,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the Markdown link list
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}
