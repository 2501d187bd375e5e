//! Checks changelog entry scopes against the configured allow-list.

use std::process::ExitCode;

use changelog_scope_cli::config::CliConfig;
use changelog_scope_cli::logging::init_logging;

fn main() -> ExitCode {
    match changelog_scope_cli::run() {
        Ok(code) => code,
        Err(e) => {
            // Settings may have failed before logging was configured.
            init_logging(&CliConfig::default());
            tracing::error!(error = %format!("{e:#}"), "changelog-scope failed");
            ExitCode::from(2)
        }
    }
}
