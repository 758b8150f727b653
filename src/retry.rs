//! Retry with exponential backoff for transient HTTP failures
//!
//! Only the fetch of the source document goes through this module. Extraction
//! errors are deterministic and are never retried.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Errors that can tell whether repeating the operation may succeed
pub trait RetryableError {
    /// Whether the failed operation is worth repeating
    fn is_retryable(&self) -> bool;

    /// Short human-readable reason, used in log output
    fn retry_reason(&self) -> &str;
}

/// Backoff settings for [`with_retry`]
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Factor applied to the delay after each retry
    pub backoff_multiplier: f64,
    /// Add up to 25% random jitter to each delay
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

impl RetryConfig {
    /// Create a retry configuration with default backoff settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable retries entirely
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Delay to wait before retry number `attempt` (zero-based)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(attempt as i32);
        // Never negative, whatever the multiplier
        let capped = base.min(self.max_delay.as_secs_f64()).max(0.0);

        let delay = if self.use_jitter {
            let jitter = rand::thread_rng().gen_range(0.0..=0.25);
            (capped * (1.0 + jitter)).min(self.max_delay.as_secs_f64())
        } else {
            capped
        };

        Duration::from_secs_f64(delay)
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or
/// runs out of retries.
pub async fn with_retry<F, Fut, T, E>(
    mut operation: F,
    config: &RetryConfig,
    operation_name: &str,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: RetryableError + std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(attempt, "{} succeeded after retry", operation_name);
                }
                return Ok(value);
            }
            Err(err) if err.is_retryable() && attempt < config.max_retries => {
                let delay = config.delay_for_attempt(attempt);
                attempt += 1;
                warn!(
                    attempt,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    reason = err.retry_reason(),
                    "{} failed: {}, retrying",
                    operation_name,
                    err
                );
                sleep(delay).await;
            }
            Err(err) => {
                if err.is_retryable() {
                    warn!(
                        attempts = attempt + 1,
                        "{} failed, retries exhausted: {}", operation_name, err
                    );
                } else {
                    debug!(reason = err.retry_reason(), "{} failed: {}", operation_name, err);
                }
                return Err(err);
            }
        }
    }
}
