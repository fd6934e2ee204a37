//! `tracing` subscriber bootstrap for the binaries.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "microservice_core=info";

/// Installs the global fmt subscriber, honoring `RUST_LOG`.
///
/// Returns `false` if a subscriber was already installed; calling twice is harmless.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
