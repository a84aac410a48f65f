//! Tests for the sliding request window.

use std::time::{Duration, Instant};
use taleweaver_rate_limit::{RateLimitConfig, RequestWindow};

#[test]
fn test_quota_rejects_excess_calls() {
    let mut window = RequestWindow::default();
    let now = Instant::now();

    for i in 0..5 {
        assert!(window.try_admit(now), "call {} should be admitted", i);
    }

    // Sixth call at the same instant must be rejected.
    assert!(!window.try_admit(now));
    // Rejection does not record the attempt.
    assert_eq!(window.admitted_count(), 5);
}

#[test]
fn test_window_slides() {
    let mut window = RequestWindow::default();
    let start = Instant::now();

    assert!(window.try_admit(start));
    for _ in 0..4 {
        assert!(window.try_admit(start + Duration::from_secs(10)));
    }
    assert!(!window.try_admit(start + Duration::from_secs(30)));

    // Once the oldest call ages past the window, a slot frees up.
    assert!(window.try_admit(start + Duration::from_secs(61)));
}

#[test]
fn test_window_boundary_is_open() {
    let config = RateLimitConfig::default().with_max_requests(1);
    let mut window = RequestWindow::new(config);
    let start = Instant::now();

    assert!(window.try_admit(start));
    // One nanosecond short of the boundary: still counted.
    assert!(!window.try_admit(start + Duration::from_secs(60) - Duration::from_nanos(1)));
    // Exactly one window later the old call no longer counts.
    assert!(window.try_admit(start + Duration::from_secs(60)));
}

#[test]
fn test_retry_after_reports_oldest_expiry() {
    let config = RateLimitConfig::default().with_max_requests(2);
    let mut window = RequestWindow::new(config);
    let start = Instant::now();

    assert_eq!(window.retry_after(start), None);

    assert!(window.try_admit(start));
    assert!(window.try_admit(start + Duration::from_secs(5)));

    let wait = window
        .retry_after(start + Duration::from_secs(10))
        .expect("window is full");
    assert_eq!(wait, Duration::from_secs(50));

    // After the oldest call expires there is no wait.
    assert_eq!(window.retry_after(start + Duration::from_secs(60)), None);
}

#[test]
fn test_custom_quota() {
    let config = RateLimitConfig::default()
        .with_max_requests(2)
        .with_window(Duration::from_secs(10));
    let mut window = RequestWindow::new(config);
    let start = Instant::now();

    assert!(window.try_admit(start));
    assert!(window.try_admit(start));
    assert!(!window.try_admit(start));
    assert!(window.try_admit(start + Duration::from_secs(10)));
}
