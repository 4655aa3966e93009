//! Logging initialization.
//!
//! The library only emits `tracing` events; the binary installs the
//! subscriber here once at startup.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Fallback directive when the configured one does not parse.
const DEFAULT_FILTER: &str = "info";

/// Build the event filter for `config`, falling back to `info`.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
        eprintln!(
            "Warning: invalid log level '{}' ({e}), using {DEFAULT_FILTER}",
            config.level
        );
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Install the global fmt subscriber writing to stderr.
///
/// Lines carry timestamp, level, target (when `show_target`) and message.
/// A second call leaves the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(config.show_target())
        .with_writer(std::io::stderr)
        .try_init();
}
