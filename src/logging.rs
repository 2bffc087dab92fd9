//! Logging init for the command-line tool.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to binaries.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,pear_link=info";

/// Initialize logging to stderr. `RUST_LOG` overrides the default filter.
///
/// Returns false when a global subscriber was already installed.
pub fn init_logging_stderr() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok()
}
