use crate::quote::error::QuoteRequestError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, trace, warn};

/// Bounded linear backoff applied to rate-limited provider calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first call included.
    pub max_attempts: u32,
    /// The pause after the n-th rate-limited attempt is `n * backoff_step`.
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_step: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }
}

/// Runs `op` until it succeeds, retrying only while the provider answers 429
/// and attempts remain.
///
/// Any other failure, or running out of attempts, is logged and turned into
/// `empty`; this never returns an error to the caller.
pub async fn fetch_or_empty<T, F, Fut>(policy: &RetryPolicy, what: &str, empty: T, mut op: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, QuoteRequestError>>,
{
    for attempt in 1..=policy.max_attempts {
        trace!("Fetching {}, attempt {} of {}", what, attempt, policy.max_attempts);

        match op().await {
            Ok(value) => return value,
            Err(err) if err.is_rate_limited() && attempt < policy.max_attempts => {
                let delay = policy.delay_for(attempt);
                warn!("Rate limit exceeded, retrying in {} seconds...", delay.as_secs());
                sleep(delay).await;
            }
            Err(err) => {
                error!("Error fetching {}: {}", what, err);
                return empty;
            }
        }
    }

    empty
}
