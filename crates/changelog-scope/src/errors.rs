//! Error types shared by the scope parser and configuration loader.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::scope::Scope;

/// Context for a sub-scope rejected by the allow-list.
///
/// `permitted` is `None` when the primary scope accepts no sub-scopes at all,
/// either because it is not configured or because no scopes are configured.
///
/// # Examples
/// ```
/// use changelog_scope::SubscopeErrorInfo;
/// let info = SubscopeErrorInfo::new("foo", "nope", Some(vec!["bar".into(), "baz".into()]));
/// assert_eq!(
///     info.to_string(),
///     "invalid subscope `nope` found, expected one of: bar, baz; or use the force option to override"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscopeErrorInfo {
    /// Primary scope the sub-scope was attached to.
    pub scope: String,
    /// The offending sub-scope token.
    pub subscope: String,
    /// Sub-scopes the primary scope accepts, if it accepts any.
    pub permitted: Option<Vec<String>>,
}

impl SubscopeErrorInfo {
    /// Create a new description of a rejected sub-scope.
    #[must_use]
    pub fn new(
        scope: impl Into<String>,
        subscope: impl Into<String>,
        permitted: Option<Vec<String>>,
    ) -> Self {
        Self {
            scope: scope.into(),
            subscope: subscope.into(),
            permitted,
        }
    }
}

impl fmt::Display for SubscopeErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.permitted {
            Some(permitted) => write!(
                f,
                "invalid subscope `{}` found, expected one of: {}; or use the force option to override",
                self.subscope,
                permitted.join(", ")
            ),
            None => write!(
                f,
                "invalid subscope `{}` found, scope `{}` expects none",
                self.subscope, self.scope
            ),
        }
    }
}

/// Errors returned when a scope string fails validation.
///
/// Every variant carries the scope as far as it was parsed, so callers can
/// report exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// A sub-scope is not permitted for its primary scope.
    #[error("{info}")]
    InvalidSubscope {
        /// Details of the rejected token.
        info: SubscopeErrorInfo,
        /// The scope as parsed before validation failed.
        parsed: Scope,
    },
    /// The primary scope is not in the allow-list.
    #[error("invalid scope `{}` found, see help for available scopes", .parsed.primary())]
    InvalidScope {
        /// The scope as parsed before validation failed.
        parsed: Scope,
    },
    /// Sub-scopes were supplied without a primary scope.
    #[error("subscopes `{}` given without a primary scope", .parsed.subscopes().join(","))]
    MissingPrimary {
        /// The rejected input, with an empty primary.
        parsed: Scope,
    },
}

impl ScopeError {
    /// The partially parsed scope that was rejected.
    #[must_use]
    pub fn parsed(&self) -> &Scope {
        match self {
            Self::InvalidSubscope { parsed, .. }
            | Self::InvalidScope { parsed }
            | Self::MissingPrimary { parsed } => parsed,
        }
    }

    /// Consume the error, returning the partially parsed scope.
    #[must_use]
    pub fn into_parsed(self) -> Scope {
        match self {
            Self::InvalidSubscope { parsed, .. }
            | Self::InvalidScope { parsed }
            | Self::MissingPrimary { parsed } => parsed,
        }
    }
}

/// Errors surfaced while loading a changelog configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration `{}`: {source}", .path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The configuration is not valid YAML for the expected layout.
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
