//! Command dispatch for the `changelog-scope` entrypoint.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use changelog_scope::{ChangelogConfig, Scope, ScopeError, parse_scope};
use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::{CliConfig, LogLevel};
use crate::logging::init_logging;
use crate::output::{
    CheckReport, write_rejection, write_reports_json, write_scope, write_scope_listing,
    write_type_listing,
};

/// Validate and normalise changelog entry scopes.
#[derive(Parser)]
#[command(name = "changelog-scope", author, version, about)]
pub(crate) struct Cli {
    /// Changelog configuration file [env: CHANGELOG_SCOPE_CONFIG] [default: changelog.yaml].
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check scope strings against the configured allow-list.
    Check(CheckArgs),
    /// List the configured scopes and their sub-scopes.
    Scopes,
    /// List the configured change types.
    Types,
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Skip allow-list validation and only normalise the input.
    #[arg(long)]
    pub force: bool,
    /// Emit JSON instead of one scope per line.
    #[arg(long)]
    pub json: bool,
    /// Scopes to check, e.g. `foo/bar,baz`.
    #[arg(required = true)]
    pub scopes: Vec<String>,
}

/// Parse the command line and run the selected command.
///
/// Returns [`ExitCode::FAILURE`] when `check` rejects any scope.
///
/// # Errors
///
/// Returns an error when the settings or the changelog configuration cannot
/// be loaded, or output cannot be written.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = CliConfig::from_env()
        .wrap_err("failed to read settings from the environment")?
        .apply_overrides(cli.config, cli.log_level);
    init_logging(&settings);

    let config = ChangelogConfig::load(&settings.config_path)
        .wrap_err("failed to load changelog configuration")?;
    info!(
        path = %settings.config_path.display(),
        scopes = config.scopes.len(),
        types = config.types.len(),
        "loaded changelog configuration"
    );

    match cli.command {
        Commands::Check(args) => handle_check(&config, &args),
        Commands::Scopes => handle_scopes(&config).map(|()| ExitCode::SUCCESS),
        Commands::Types => handle_types(&config).map(|()| ExitCode::SUCCESS),
    }
}

fn handle_check(config: &ChangelogConfig, args: &CheckArgs) -> Result<ExitCode> {
    let outcomes: Vec<(&str, Result<Scope, ScopeError>)> = args
        .scopes
        .iter()
        .map(|input| {
            debug!(input = %input, force = args.force, "checking scope");
            (input.as_str(), parse_scope(&config.scopes, input, args.force))
        })
        .collect();
    let rejected = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();

    let mut stdout = io::stdout();
    if args.json {
        let reports: Vec<_> = outcomes
            .iter()
            .map(|(input, outcome)| CheckReport::new(input, outcome))
            .collect();
        write_reports_json(&mut stdout, &reports)?;
    } else {
        let mut stderr = io::stderr();
        for (input, outcome) in &outcomes {
            match outcome {
                Ok(scope) => write_scope(&mut stdout, scope)?,
                Err(err) => write_rejection(&mut stderr, input, err)?,
            }
        }
    }
    stdout.flush().wrap_err("failed to flush scope output")?;

    if rejected == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(rejected, total = outcomes.len(), "scope check failed");
        Ok(ExitCode::FAILURE)
    }
}

fn handle_scopes(config: &ChangelogConfig) -> Result<()> {
    let mut stdout = io::stdout();
    write_scope_listing(&mut stdout, config)?;
    stdout.flush().wrap_err("failed to flush scope listing")
}

fn handle_types(config: &ChangelogConfig) -> Result<()> {
    let mut stdout = io::stdout();
    write_type_listing(&mut stdout, config)?;
    stdout.flush().wrap_err("failed to flush type listing")
}
