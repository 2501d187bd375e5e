//! Scope annotations for changelog entries.
//!
//! A scope is a primary category with an optional list of sub-scopes, written
//! as `primary[/sub,sub,...]`. The crate parses and normalises that form,
//! validates it against a permitted-scopes allow-list, and provides the
//! [`Scope`] value type which serialises back to the canonical string.
//!
//! # Examples
//! ```
//! use changelog_scope::{ScopeConfig, parse_scope};
//!
//! let config: ScopeConfig = [("foo", vec!["bar", "baz"]), ("quux", vec![])]
//!     .into_iter()
//!     .collect();
//! let scope = parse_scope(&config, " FOO / Bar, BAZ ", false).unwrap();
//! assert_eq!(scope.primary(), "foo");
//! assert_eq!(scope.subscopes(), ["bar", "baz"]);
//! assert_eq!(scope.to_string(), "foo/bar,baz");
//! ```

mod config;
mod errors;
mod parser;
mod scope;

pub use config::{ChangelogConfig, ScopeConfig};
pub use errors::{ConfigError, ScopeError, SubscopeErrorInfo};
pub use parser::parse_scope;
pub use scope::Scope;
