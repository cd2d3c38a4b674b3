//! Tracing subscriber setup for hosts embedding the crate.

use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_LOG_FILTER`] when the variable is unset or
/// unparsable. Returns `false` if a global subscriber was already installed,
/// which makes repeated calls (e.g. from several tests) harmless.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
