//! Tracing subscriber initialization.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaulting to `info`. Safe to call more
/// than once; subsequent calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    if result.is_ok() {
        debug!("Tracing subscriber initialized");
    }
}
