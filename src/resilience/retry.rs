//! Bounded retry with backoff for retryable service errors.

use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Retry configuration.
///
/// The delay for attempt `n` (0-based) is `min_delay * 2^n`, capped at
/// `max_delay`. A fixed wait — e.g. the 65 s a rate-limit window takes to
/// reset — is expressed by setting `min_delay == max_delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt (0 disables retrying).
    pub max_retries: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Fixed wait between attempts.
    pub fn fixed(max_retries: u32, delay: Duration) -> Self {
        Self {
            max_retries,
            min_delay: delay,
            max_delay: delay,
        }
    }

    pub fn with_min_delay(mut self, min_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Delay before retry number `attempt` (0-based).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        let ms = (self.min_delay.as_millis() as u64).saturating_mul(factor);
        Duration::from_millis(ms).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

/// Run `op`, retrying while the failure is retryable and budget remains.
///
/// - Success returns immediately.
/// - A non-retryable error (any local error, or a service error that is
///   neither `RATE_LIMITED`, `TIMEOUT`, nor a 5xx) propagates unchanged on
///   the first failure.
/// - After `policy.max_retries` retries, the last classified error is
///   returned.
///
/// Each invocation of `op` must be a fresh, idempotent submission of the same
/// request; that is the caller's responsibility. Cancelling `cancel` aborts
/// promptly during the backoff wait.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0u32;
    loop {
        let err = match op().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !err.is_retryable() || attempt >= policy.max_retries {
            return Err(err);
        }

        let delay = policy.backoff_delay(attempt);
        debug!(
            attempt,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "retrying after retryable failure"
        );
        tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_until_capped() {
        let policy = RetryPolicy {
            max_retries: 5,
            min_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(450),
        };
        assert_eq!(policy.backoff_delay(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_delay(2), Duration::from_millis(400));
        assert_eq!(policy.backoff_delay(3), Duration::from_millis(450));
        assert_eq!(policy.backoff_delay(31), Duration::from_millis(450));
    }

    #[test]
    fn fixed_policy_never_grows() {
        let policy = RetryPolicy::fixed(3, Duration::from_secs(65));
        assert_eq!(policy.backoff_delay(0), Duration::from_secs(65));
        assert_eq!(policy.backoff_delay(2), Duration::from_secs(65));
    }

    #[test]
    fn huge_attempt_counts_do_not_overflow() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_delay(u32::MAX), policy.max_delay);
    }
}
