//! Environment-driven diagnostics setup for the binary.
//!
//! Only `RUST_LOG` is read, and only to filter diagnostics. Sampling
//! parameters never come from the environment.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: warnings only, so a normal run
/// prints nothing besides the result line.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a stderr fmt subscriber. Tolerates an already-installed subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok(); // May fail if already initialized
}
