//! Sliding admission window over recent call timestamps.

use crate::RateLimitConfig;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tracks admitted-call timestamps in a trailing window and admits or
/// rejects new calls against the configured quota.
///
/// Timestamps are appended in chronological order, so expiry is a prefix
/// trim. The window boundary is open: a call exactly one window old no
/// longer counts. Rejected calls are not recorded.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use taleweaver_rate_limit::RequestWindow;
///
/// let mut window = RequestWindow::default();
/// let now = Instant::now();
/// for _ in 0..5 {
///     assert!(window.try_admit(now));
/// }
/// assert!(!window.try_admit(now));
/// ```
#[derive(Debug, Clone)]
pub struct RequestWindow {
    config: RateLimitConfig,
    admitted: VecDeque<Instant>,
}

impl RequestWindow {
    /// Creates a new request window with the given limits.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            admitted: VecDeque::new(),
        }
    }

    /// Gets the rate limit configuration.
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Drops timestamps that have aged out of the trailing window.
    fn trim(&mut self, now: Instant) {
        while let Some(oldest) = self.admitted.front() {
            if now.duration_since(*oldest) >= *self.config.window() {
                self.admitted.pop_front();
            } else {
                break;
            }
        }
    }

    /// Attempts to admit a call at `now`.
    ///
    /// Returns true and records the timestamp when the trailing window holds
    /// fewer than `max_requests` admitted calls; returns false without
    /// recording anything otherwise.
    #[tracing::instrument(skip(self, now))]
    pub fn try_admit(&mut self, now: Instant) -> bool {
        self.trim(now);

        if (self.admitted.len() as u32) < *self.config.max_requests() {
            self.admitted.push_back(now);
            tracing::debug!(
                admitted = self.admitted.len(),
                quota = *self.config.max_requests(),
                "Call admitted"
            );
            true
        } else {
            tracing::debug!(quota = *self.config.max_requests(), "Call rejected");
            false
        }
    }

    /// Time until the oldest admitted call ages out of the window.
    ///
    /// Returns `None` when a call would be admitted immediately.
    pub fn retry_after(&mut self, now: Instant) -> Option<Duration> {
        self.trim(now);

        if (self.admitted.len() as u32) < *self.config.max_requests() {
            return None;
        }

        self.admitted
            .front()
            .map(|oldest| *self.config.window() - now.duration_since(*oldest))
    }

    /// Number of admitted calls currently inside the window.
    ///
    /// Counts against a lazily trimmed sequence; call after `try_admit` or
    /// `retry_after` for an up-to-date value.
    pub fn admitted_count(&self) -> usize {
        self.admitted.len()
    }
}

impl Default for RequestWindow {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
