//! Helpers for rendering command output.

use std::io::Write;

use changelog_scope::{ChangelogConfig, Scope, ScopeError};
use eyre::{Context, Result};
use serde::Serialize;

/// Outcome of checking a single scope argument, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub(crate) struct CheckReport<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub primary: &'a str,
    pub subscopes: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> CheckReport<'a> {
    pub(crate) fn new(input: &'a str, outcome: &'a Result<Scope, ScopeError>) -> Self {
        match outcome {
            Ok(scope) => Self {
                input,
                scope: Some(scope.to_string()),
                primary: scope.primary(),
                subscopes: scope.subscopes(),
                error: None,
            },
            Err(err) => Self {
                input,
                scope: None,
                primary: err.parsed().primary(),
                subscopes: err.parsed().subscopes(),
                error: Some(err.to_string()),
            },
        }
    }
}

pub(crate) fn write_scope(writer: &mut dyn Write, scope: &Scope) -> Result<()> {
    writeln!(writer, "{scope}").wrap_err_with(|| format!("failed to write scope `{scope}`"))
}

pub(crate) fn write_rejection(writer: &mut dyn Write, input: &str, err: &ScopeError) -> Result<()> {
    writeln!(writer, "{input}: {err}")
        .wrap_err_with(|| format!("failed to report rejected scope `{input}`"))
}

pub(crate) fn write_reports_json(
    writer: &mut dyn Write,
    reports: &[CheckReport<'_>],
) -> Result<()> {
    serde_json::to_writer(&mut *writer, reports)
        .wrap_err("failed to serialize scope reports to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}

pub(crate) fn write_scope_listing(writer: &mut dyn Write, config: &ChangelogConfig) -> Result<()> {
    for (scope, subscopes) in config.scopes.iter() {
        let written = if subscopes.is_empty() {
            writeln!(writer, "{scope}")
        } else {
            writeln!(writer, "{scope}: {}", subscopes.join(", "))
        };
        written.wrap_err_with(|| format!("failed to list scope `{scope}`"))?;
    }
    Ok(())
}

pub(crate) fn write_type_listing(writer: &mut dyn Write, config: &ChangelogConfig) -> Result<()> {
    for (key, heading) in &config.types {
        writeln!(writer, "{key}: {heading}")
            .wrap_err_with(|| format!("failed to list type `{key}`"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog_scope::{ScopeConfig, parse_scope};

    fn config() -> eyre::Result<ChangelogConfig> {
        Ok(ChangelogConfig::from_yaml_str(
            "types:\n  feat: Features\nscopes:\n  foo: [bar, baz]\n  quux: []\n",
        )?)
    }

    fn render(write: impl FnOnce(&mut dyn Write) -> Result<()>) -> eyre::Result<String> {
        let mut buffer = Vec::new();
        write(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    #[test]
    fn lists_scopes_in_configured_order() -> eyre::Result<()> {
        let config = config()?;
        let text = render(|w| write_scope_listing(w, &config))?;
        assert_eq!(text, "foo: bar, baz\nquux\n");
        Ok(())
    }

    #[test]
    fn lists_types() -> eyre::Result<()> {
        let config = config()?;
        let text = render(|w| write_type_listing(w, &config))?;
        assert_eq!(text, "feat: Features\n");
        Ok(())
    }

    #[test]
    fn rejection_names_input() -> eyre::Result<()> {
        let scopes = ScopeConfig::default();
        let Err(err) = parse_scope(&scopes, "foo/bar", false) else {
            eyre::bail!("expected rejection");
        };
        let text = render(|w| write_rejection(w, "foo/bar", &err))?;
        assert_eq!(
            text,
            "foo/bar: invalid subscope `bar` found, scope `foo` expects none\n"
        );
        Ok(())
    }

    #[test]
    fn json_report_carries_partial_scope() -> eyre::Result<()> {
        let config = config()?;
        let outcome = parse_scope(&config.scopes, "Foo/Nope", false);
        let report = CheckReport::new("Foo/Nope", &outcome);
        let text = render(|w| write_reports_json(w, &[report]))?;
        let parsed: serde_json::Value = serde_json::from_str(&text)?;
        let entry = parsed
            .as_array()
            .and_then(|array| array.first())
            .ok_or_else(|| eyre::eyre!("missing entry"))?;
        assert_eq!(entry.get("primary"), Some(&serde_json::Value::from("foo")));
        assert_eq!(entry.get("subscopes"), Some(&serde_json::json!(["nope"])));
        assert!(entry.get("scope").is_none());
        assert!(entry.get("error").is_some());
        Ok(())
    }

    #[test]
    fn json_report_renders_accepted_scope() -> eyre::Result<()> {
        let config = config()?;
        let outcome = parse_scope(&config.scopes, " FOO / Bar ", false);
        let report = CheckReport::new(" FOO / Bar ", &outcome);
        assert_eq!(report.scope.as_deref(), Some("foo/bar"));
        assert!(report.error.is_none());
        Ok(())
    }
}
