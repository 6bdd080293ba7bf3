//! Logging setup using tracing + tracing-subscriber.
//!
//! Log output goes to stderr so that stdout carries nothing but report lines.
//! The level defaults to `warn` and can be raised per module via `RUST_LOG`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber.
///
/// Returns false if a subscriber was already installed.
pub fn init_logging() -> bool {
    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(console_layer)
        .try_init()
        .is_ok()
}
