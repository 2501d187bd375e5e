//! Structured logging for the command-line front end.
//!
//! Logs go to stderr so scope listings and JSON reports on stdout stay
//! machine-readable. Records emitted by the library through the `log` facade
//! are forwarded into the same subscriber.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `CHANGELOG_SCOPE_LOG_LEVEL`
/// 3. Default configuration value
///
/// A second call is a no-op; the first subscriber installed wins.
pub fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish()
        .try_init();

    // Already initialised, e.g. by an earlier call in tests.
    if result.is_err() {
        tracing::trace!("logging already initialised");
    }
}
