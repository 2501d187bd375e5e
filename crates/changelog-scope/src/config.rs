//! Permitted-scope configuration and its YAML loader.
//!
//! The configuration file carries two tables: `types`, mapping change-type
//! keys to their changelog headings, and `scopes`, mapping each permitted
//! primary scope to the sub-scopes it accepts. Table order is preserved so
//! listings and error messages follow the file.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ConfigError;
use crate::parser::normalise;

/// Ordered allow-list of primary scopes and their permitted sub-scopes.
///
/// An empty configuration means no scopes are configured. Names are
/// normalised on construction so they compare equal to parsed input.
///
/// # Examples
/// ```
/// use changelog_scope::ScopeConfig;
///
/// let config: ScopeConfig = [("Foo", vec!["bar"]), ("quux", vec![])].into_iter().collect();
/// assert_eq!(config.permitted_subscopes("foo"), Some(&["bar".to_string()][..]));
/// assert!(config.is_permitted("quux"));
/// assert!(!config.is_permitted("nope"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScopeConfig {
    scopes: IndexMap<String, Vec<String>>,
}

impl ScopeConfig {
    /// Sub-scopes permitted for `scope`, or `None` when the scope is not
    /// configured.
    #[must_use]
    pub fn permitted_subscopes(&self, scope: &str) -> Option<&[String]> {
        self.scopes.get(scope).map(Vec::as_slice)
    }

    /// Whether `scope` is a configured primary scope.
    #[must_use]
    pub fn is_permitted(&self, scope: &str) -> bool {
        self.scopes.contains_key(scope)
    }

    /// Whether no scopes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Number of configured primary scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Iterate over the configured scopes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.scopes
            .iter()
            .map(|(scope, subs)| (scope.as_str(), subs.as_slice()))
    }
}

impl<K, I, S> FromIterator<(K, I)> for ScopeConfig
where
    K: AsRef<str>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    /// Scopes that normalise to the same name are merged, keeping the first
    /// position and appending sub-scopes not already listed.
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut scopes: IndexMap<String, Vec<String>> = IndexMap::new();
        for (scope, subs) in iter {
            let subs = subs.into_iter().map(|sub| normalise(sub.as_ref()));
            match scopes.entry(normalise(scope.as_ref())) {
                Entry::Vacant(entry) => {
                    entry.insert(subs.collect());
                }
                Entry::Occupied(mut entry) => {
                    log::warn!(
                        "scope `{}` is configured more than once, merging its sub-scopes",
                        entry.key()
                    );
                    let existing = entry.get_mut();
                    for sub in subs {
                        if !existing.contains(&sub) {
                            existing.push(sub);
                        }
                    }
                }
            }
        }
        Self { scopes }
    }
}

impl<'de> Deserialize<'de> for ScopeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `quux:` with no value is a scope without sub-scopes.
        let raw = IndexMap::<String, Option<Vec<String>>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(scope, subs)| (scope, subs.unwrap_or_default()))
            .collect())
    }
}

/// Changelog configuration document.
///
/// # Examples
/// ```
/// use changelog_scope::ChangelogConfig;
///
/// let config = ChangelogConfig::from_yaml_str("scopes:\n  foo: [bar]\n").unwrap();
/// assert!(config.scopes.is_permitted("foo"));
/// assert!(config.types.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Change-type keys mapped to their section headings.
    pub types: IndexMap<String, String>,
    /// Permitted scopes and sub-scopes.
    pub scopes: ScopeConfig,
}

impl ChangelogConfig {
    /// Parse a configuration from YAML text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Yaml`] when the text is not valid YAML or does
    /// not match the expected layout.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // An empty document deserialises as unit, not as an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Yaml`] when its contents fail to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        log::debug!(
            "loaded {} scope(s) and {} type(s) from {}",
            config.scopes.len(),
            config.types.len(),
            path.display()
        );
        Ok(config)
    }
}
