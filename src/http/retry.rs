//! Opt-in retry for market data reads.
//!
//! Clients never retry unless built with a retrying [`RetryPolicy`].

use crate::error::HttpError;
use std::time::Duration;

/// Statuses worth another attempt: rate limiting and upstream/gateway trouble.
const TRANSIENT_STATUSES: [u16; 4] = [429, 502, 503, 504];

/// Which failed reads are attempted again.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    #[default]
    None,
    /// [`RetryConfig::default`]: three retries on transport failures and
    /// 429/502/503/504.
    Idempotent,
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolved config, or `None` when retries are off.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::default()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Exponential backoff settings.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first request.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_factor: f64,
    /// Spread each delay by up to ±25%.
    pub jitter: bool,
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(8),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: TRANSIENT_STATUSES.to_vec(),
        }
    }
}

impl RetryConfig {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
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
        self.jitter = false;
        self
    }

    /// Transport failures and the configured statuses are retried; decode and
    /// encode failures never are.
    pub(crate) fn is_retryable(&self, error: &HttpError) -> bool {
        match error {
            HttpError::RequestFailed { status, .. } => self.retryable_statuses.contains(status),
            HttpError::Reqwest(e) => {
                #[cfg(not(target_arch = "wasm32"))]
                let transient = e.is_connect() || e.is_timeout() || e.is_request();
                #[cfg(target_arch = "wasm32")]
                let transient = e.is_timeout() || e.is_request();
                transient
            }
            HttpError::Decode(_) | HttpError::Encode(_) | HttpError::MaxRetriesExceeded { .. } => {
                false
            }
        }
    }

    /// Wait before retry number `attempt` (0-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let scaled = self.initial_delay.as_nanos() as f64 * self.backoff_factor.powi(exponent);
        let capped = scaled.min(self.max_delay.as_nanos() as f64);

        let nanos = if self.jitter {
            capped * (1.0 + (rand::random::<f64>() - 0.5) * 0.5)
        } else {
            capped
        };
        Duration::from_nanos(nanos.max(0.0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_default_is_none() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
        assert!(RetryPolicy::default().config().is_none());
    }

    #[test]
    fn test_idempotent_statuses() {
        let config = RetryPolicy::Idempotent.config().unwrap();
        for status in [429, 502, 503, 504] {
            assert!(config.is_retryable(&failed(status)), "{status}");
        }
        assert!(!config.is_retryable(&failed(404)));
        assert!(!config.is_retryable(&failed(500)));
    }

    fn failed(status: u16) -> HttpError {
        HttpError::RequestFailed {
            context: "Failed to get items count",
            status,
            reason: String::new(),
        }
    }

    #[test]
    fn test_decode_failure_not_retried() {
        let config = RetryConfig::default();
        assert!(!config.is_retryable(&HttpError::Decode("bad body".to_string())));
    }

    #[test]
    fn test_backoff_doubles() {
        let config = RetryConfig::new(3)
            .with_initial_delay(Duration::from_millis(100))
            .without_jitter();
        assert_eq!(config.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(config.delay_for_attempt(2), Duration::from_millis(400));
    }

    #[test]
    fn test_backoff_capped() {
        let config = RetryConfig::new(10)
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(2))
            .without_jitter();
        assert_eq!(config.delay_for_attempt(6), Duration::from_secs(2));
    }

    #[test]
    fn test_jitter_bounds() {
        let config = RetryConfig::new(1).with_initial_delay(Duration::from_millis(400));
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((300..=500).contains(&ms), "delay {ms} out of range");
        }
    }
}
