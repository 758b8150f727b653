//! Configuration for fetching the event reference

use std::time::Duration;

use crate::retry::RetryConfig;

/// Raw markdown source of the MDN "Event reference" page
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/mdn/content/main/files/en-us/web/events/index.md";

/// Where the generated stub is written, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "src/pyscript/types/event_types.pyi";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`SourceClient`](crate::client::SourceClient)
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use mdn_event_stubs::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-build/1.0");
///
/// assert_eq!(config.effective_user_agent(), "my-build/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Source URL override
    pub source_url: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// User agent override
    pub user_agent: Option<String>,
    /// Backoff settings for transient HTTP failures
    pub retry_config: RetryConfig,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            source_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            retry_config: RetryConfig::default(),
        }
    }

    /// Fetch the event reference from a different URL, e.g. a mirror or a
    /// mock server
    pub fn with_source_url<S: Into<String>>(mut self, url: S) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        self.with_timeout(Duration::from_secs(seconds))
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn effective_source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("mdn-event-stubs/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
