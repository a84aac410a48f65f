//! Rate limit configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of requests admitted per window.
const DEFAULT_MAX_REQUESTS: u32 = 5;

/// Default window length in seconds.
const DEFAULT_WINDOW_SECS: u64 = 60;

/// Configuration for the sliding request window.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taleweaver_rate_limit::RateLimitConfig;
///
/// let config = RateLimitConfig::default().with_max_requests(10);
/// assert_eq!(*config.max_requests(), 10);
/// assert_eq!(*config.window(), Duration::from_secs(60));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct RateLimitConfig {
    /// Maximum calls admitted inside one trailing window
    max_requests: u32,
    /// Length of the trailing window
    window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
        }
    }
}
