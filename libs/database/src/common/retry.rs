use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for retrying transient failures (e.g. the database not yet
/// accepting connections during startup)
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt; 0 disables retrying
    pub max_retries: u32,

    /// Delay before the first retry
    pub initial_delay: Duration,

    /// Upper bound for any single delay
    pub max_delay: Duration,

    /// Factor applied to the delay after every failed retry
    pub backoff_multiplier: u32,

    /// Randomize each delay between 50% and 100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
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

    /// Nominal (jitter-free) delay before retry number `retry` (1-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = self
            .backoff_multiplier
            .saturating_pow(retry.saturating_sub(1));
        self.initial_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl Default for RetryConfig {
    /// 3 retries, 100ms initial delay doubling up to 5s, with jitter
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The last error is returned unchanged when every attempt fails.
///
/// # Example
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let db = retry_with_backoff("postgres connect", RetryConfig::default(), || {
///     database::postgres::connect_with_options(options.clone())
/// })
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(
    operation_name: &str,
    config: RetryConfig,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retry = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if retry > 0 {
                    debug!(operation = operation_name, retries = retry, "Succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) if retry >= config.max_retries => {
                warn!(
                    operation = operation_name,
                    attempts = retry + 1,
                    "Giving up: {}",
                    e
                );
                return Err(e);
            }
            Err(e) => {
                retry += 1;
                let nominal = config.delay_for(retry);
                let delay = if config.use_jitter {
                    apply_jitter(nominal)
                } else {
                    nominal
                };

                debug!(
                    operation = operation_name,
                    "Attempt {}/{} failed: {}. Retrying in {:?}",
                    retry,
                    config.max_retries + 1,
                    e,
                    delay
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Scale a delay to a pseudo-random 50%..=100% of its value.
fn apply_jitter(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = 50 + (RandomState::new().hash_one(std::time::SystemTime::now()) % 51) as u32;
    delay * percent / 100
}
