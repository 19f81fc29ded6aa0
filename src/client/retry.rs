//! Retry policy for transient failures
//!
//! Retries are off by default. When enabled, connection failures, request
//! timeouts and the statuses 429/500/502/503/504 are retried with exponential
//! backoff, honoring `Retry-After` when the service sends it.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Upper bound for a single backoff delay
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Retry configuration owned by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt. 0 disables retries.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub base_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_interval: Duration) -> Self {
        Self {
            max_retries,
            base_interval,
        }
    }

    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            base_interval: Duration::ZERO,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_retries > 0
    }

    /// Whether another attempt is allowed after `attempt` retries.
    pub fn allows(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }

    /// Statuses worth retrying. 501 means the operation will never succeed.
    pub fn is_retryable_status(status_code: u16) -> bool {
        matches!(status_code, 429 | 500 | 502 | 503 | 504)
    }

    /// Transport failures worth retrying.
    pub fn is_retryable_error(err: &reqwest::Error) -> bool {
        err.is_connect() || err.is_timeout()
    }

    /// Delay before retry number `attempt` (0-based).
    ///
    /// A `Retry-After` header given in seconds wins over the computed backoff.
    pub fn delay(&self, attempt: u32, headers: Option<&HeaderMap>) -> Duration {
        if let Some(secs) = headers.and_then(retry_after_secs) {
            return Duration::from_secs(secs).min(MAX_RETRY_DELAY);
        }
        let factor = 2u32.saturating_pow(attempt);
        self.base_interval
            .checked_mul(factor)
            .unwrap_or(MAX_RETRY_DELAY)
            .min(MAX_RETRY_DELAY)
    }
}

fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_default_is_disabled() {
        let policy = RetryPolicy::default();
        assert!(!policy.is_enabled());
        assert!(!policy.allows(0));
    }

    #[test]
    fn test_allows_up_to_max_retries() {
        let policy = RetryPolicy::new(2, Duration::from_millis(10));
        assert!(policy.allows(0));
        assert!(policy.allows(1));
        assert!(!policy.allows(2));
    }

    #[test]
    fn test_retryable_statuses() {
        for status in [429, 500, 502, 503, 504] {
            assert!(RetryPolicy::is_retryable_status(status), "{}", status);
        }
        for status in [200, 400, 401, 404, 409, 501] {
            assert!(!RetryPolicy::is_retryable_status(status), "{}", status);
        }
    }

    #[test]
    fn test_exponential_backoff() {
        let policy = RetryPolicy::new(5, Duration::from_secs(1));
        assert_eq!(policy.delay(0, None), Duration::from_secs(1));
        assert_eq!(policy.delay(1, None), Duration::from_secs(2));
        assert_eq!(policy.delay(3, None), Duration::from_secs(8));
        assert_eq!(policy.delay(10, None), MAX_RETRY_DELAY);
    }

    #[test]
    fn test_retry_after_header_wins() {
        let policy = RetryPolicy::new(3, Duration::from_secs(1));
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("5"));
        assert_eq!(policy.delay(0, Some(&headers)), Duration::from_secs(5));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("600"));
        assert_eq!(policy.delay(0, Some(&headers)), MAX_RETRY_DELAY);
    }

    #[test]
    fn test_unparseable_retry_after_falls_back() {
        let policy = RetryPolicy::new(3, Duration::from_secs(2));
        let mut headers = HeaderMap::new();
        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(policy.delay(1, Some(&headers)), Duration::from_secs(4));
    }
}
