//! Command-line configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `CHANGELOG_SCOPE_`, and flags take precedence over both.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Configuration file read when neither flag nor environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "changelog.yaml";

const CONFIG_PATH_VAR: &str = "CHANGELOG_SCOPE_CONFIG";
const LOG_LEVEL_VAR: &str = "CHANGELOG_SCOPE_LOG_LEVEL";

/// Errors raised while assembling the command-line configuration.
#[derive(Debug, Error)]
pub enum CliConfigError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidValue(String),
}

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so diagnostics stay out of normal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging.
    Trace,
    /// Debug-level information for development.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliConfigError::InvalidValue(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Settings shared by every subcommand.
///
/// # Environment Variables
///
/// - `CHANGELOG_SCOPE_CONFIG`: path of the YAML configuration file
/// - `CHANGELOG_SCOPE_LOG_LEVEL`: log level (trace, debug, info, warn, error)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Path of the changelog configuration file.
    pub config_path: PathBuf,
    /// Log level for diagnostics on stderr.
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_level: LogLevel::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns [`CliConfigError::InvalidValue`] if an environment variable
    /// contains an invalid value.
    pub fn from_env() -> Result<Self, CliConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`CliConfigError::InvalidValue`] if a variable contains an
    /// invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let config_path = match lookup(CONFIG_PATH_VAR) {
            Some(val) if val.trim().is_empty() => {
                return Err(CliConfigError::InvalidValue(format!(
                    "{CONFIG_PATH_VAR} is set but empty"
                )));
            }
            Some(val) => PathBuf::from(val),
            None => PathBuf::from(DEFAULT_CONFIG_PATH),
        };

        Ok(Self {
            config_path,
            log_level,
        })
    }

    /// Apply command-line overrides on top of environment defaults.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        config_path: Option<PathBuf>,
        log_level: Option<LogLevel>,
    ) -> Self {
        if let Some(path) = config_path {
            self.config_path = path;
        }

        if let Some(level) = log_level {
            self.log_level = level;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn log_level_parses_valid_values() {
        assert_eq!("trace".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("info".parse::<LogLevel>().ok(), Some(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!(" ERROR ".parse::<LogLevel>().ok(), Some(LogLevel::Error));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert!(err.to_string().contains("unknown log level"));
    }

    #[test]
    fn default_reads_changelog_yaml() {
        let config = CliConfig::default();
        assert_eq!(config.config_path, PathBuf::from("changelog.yaml"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn from_lookup_reads_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            ("CHANGELOG_SCOPE_CONFIG", "custom.yaml"),
            ("CHANGELOG_SCOPE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.config_path, PathBuf::from("custom.yaml"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn from_lookup_rejects_bad_log_level() {
        let result = CliConfig::from_lookup(lookup(&[("CHANGELOG_SCOPE_LOG_LEVEL", "chatty")]));
        assert!(result.is_err());
    }

    #[test]
    fn from_lookup_rejects_empty_config_path() {
        let err = CliConfig::from_lookup(lookup(&[("CHANGELOG_SCOPE_CONFIG", "  ")])).unwrap_err();
        assert!(err.to_string().contains("set but empty"));
    }

    #[test]
    fn from_lookup_falls_back_to_defaults() {
        assert_eq!(
            CliConfig::from_lookup(lookup(&[])).unwrap(),
            CliConfig::default()
        );
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig::default()
            .apply_overrides(Some(PathBuf::from("other.yaml")), Some(LogLevel::Error));
        assert_eq!(config.config_path, PathBuf::from("other.yaml"));
        assert_eq!(config.log_level, LogLevel::Error);

        let config = CliConfig::default().apply_overrides(None, None);
        assert_eq!(config, CliConfig::default());
    }
}
