//! Tracing bootstrap.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber with an env-driven filter.
///
/// Safe to call more than once; later calls are no-ops so test binaries
/// and embedding hosts do not fight over the global default.
pub fn init() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
