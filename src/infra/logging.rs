use crate::infra::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` (e.g. `RUST_LOG=produtos_api=debug`), falling
/// back to `info`. Call once, from the binary.
pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
