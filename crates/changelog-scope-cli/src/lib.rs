//! Command-line front end for changelog scope validation.
//!
//! This library powers the `changelog-scope` binary: it reads settings from
//! the environment and flags, loads the YAML changelog configuration, and
//! checks or lists scopes against it.
//!
//! # Configuration
//!
//! - `CHANGELOG_SCOPE_CONFIG`: configuration file path (default
//!   `changelog.yaml`)
//! - `CHANGELOG_SCOPE_LOG_LEVEL`: log verbosity (trace, debug, info, warn,
//!   error)

mod cli;
pub mod config;
pub mod logging;
mod output;

pub use cli::run;
