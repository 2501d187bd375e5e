//! The [`Scope`] value type and its textual encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::ScopeConfig;
use crate::errors::ScopeError;
use crate::parser::{normalise, parse_scope};

/// A parsed scope annotation: a primary scope and its sub-scopes.
///
/// An empty primary means "no scope" and never carries sub-scopes. The
/// canonical text form is produced by [`Display`](fmt::Display) and read back
/// by [`Scope::from_text`]; serde uses the same string encoding.
///
/// # Examples
/// ```
/// use changelog_scope::Scope;
///
/// let scope = Scope::new("Foo", ["bar", " BAZ "]).unwrap();
/// assert_eq!(scope.to_string(), "foo/bar,baz");
/// assert_eq!(Scope::from_text("foo/bar,baz"), Ok(scope));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scope {
    primary: String,
    subscopes: Vec<String>,
}

impl Scope {
    /// Build a scope from its parts, normalising each one.
    ///
    /// # Errors
    /// Returns [`ScopeError::MissingPrimary`] when sub-scopes are supplied
    /// with an empty primary.
    pub fn new<P, I, S>(primary: P, subscopes: I) -> Result<Self, ScopeError>
    where
        P: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scope = Self::from_parts(
            normalise(primary.as_ref()),
            subscopes
                .into_iter()
                .map(|sub| normalise(sub.as_ref()))
                .collect(),
        );
        if scope.primary.is_empty() && !scope.subscopes.is_empty() {
            return Err(ScopeError::MissingPrimary { parsed: scope });
        }
        Ok(scope)
    }

    /// The empty scope, meaning "no scope".
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a scope from its persisted text form.
    ///
    /// The allow-list is not consulted: persisted scopes are trusted to have
    /// been valid when written.
    ///
    /// # Errors
    /// Returns [`ScopeError::MissingPrimary`] for input such as `/bar`, which
    /// names sub-scopes without a primary scope.
    pub fn from_text(value: &str) -> Result<Self, ScopeError> {
        parse_scope(&ScopeConfig::default(), value, true)
    }

    pub(crate) fn from_parts(primary: String, subscopes: Vec<String>) -> Self {
        Self { primary, subscopes }
    }

    /// The primary scope, empty when no scope is set.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The sub-scopes in the order they were written.
    #[must_use]
    pub fn subscopes(&self) -> &[String] {
        &self.subscopes
    }

    /// Whether this is the empty scope.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.primary)?;
        if !self.subscopes.is_empty() {
            write!(f, "/{}", self.subscopes.join(","))?;
        }
        Ok(())
    }
}

impl FromStr for Scope {
    type Err = ScopeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_text(value)
    }
}

impl Serialize for Scope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_text(&value).map_err(serde::de::Error::custom)
    }
}
