//! Sliding-window request limiting for the Taleweaver story generation library.

mod config;
mod window;

pub use config::RateLimitConfig;
pub use window::RequestWindow;
