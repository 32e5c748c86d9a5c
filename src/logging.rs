//! Log subscriber setup
//!
//! Logs go to stderr so they never interleave with recommendation output
//! piped from stdout. `RUST_LOG` wins over the verbosity flag, which wins
//! over the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Config, Verbosity};

/// Filter directive for the given flags and config
pub fn filter_directive(verbosity: Verbosity, config: &Config) -> String {
    verbosity
        .log_level()
        .unwrap_or(config.logging.level.as_str())
        .to_string()
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbosity: Verbosity, config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity, config)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
