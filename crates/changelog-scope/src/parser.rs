//! Parser for the `primary[/sub,sub,...]` scope grammar.

use crate::config::ScopeConfig;
use crate::errors::{ScopeError, SubscopeErrorInfo};
use crate::scope::Scope;

const SUBSCOPE_DELIMITER: char = '/';
const SUBSCOPE_SEPARATOR: char = ',';

pub(crate) fn normalise(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Parse and validate a scope string against the permitted-scopes allow-list.
///
/// The input is trimmed and lower-cased, as is every token within it. An
/// empty input yields the empty scope. Validation is skipped entirely when
/// `force` is set.
///
/// The primary scope is only checked against the allow-list when sub-scopes
/// are present, so a bare unknown scope such as `"misc"` is accepted.
///
/// # Errors
/// - [`ScopeError::InvalidSubscope`] for the first sub-scope not permitted for
///   its primary scope.
/// - [`ScopeError::InvalidScope`] when every sub-scope passes but the primary
///   scope is not configured.
/// - [`ScopeError::MissingPrimary`] when `force` is set and sub-scopes follow
///   an empty primary. Without `force` such input fails the sub-scope check,
///   since the empty scope permits none.
///
/// # Examples
/// ```
/// use changelog_scope::{ScopeConfig, ScopeError, parse_scope};
///
/// let config: ScopeConfig = [("foo", vec!["bar", "baz", "thwomp"])].into_iter().collect();
/// let err = parse_scope(&config, "foo/nope", false).unwrap_err();
/// assert!(err.to_string().contains("bar, baz, thwomp"));
/// assert!(matches!(err, ScopeError::InvalidSubscope { .. }));
///
/// let forced = parse_scope(&config, "foo/nope", true).unwrap();
/// assert_eq!(forced.subscopes(), ["nope"]);
/// ```
pub fn parse_scope(config: &ScopeConfig, raw: &str, force: bool) -> Result<Scope, ScopeError> {
    let value = normalise(raw);
    if value.is_empty() {
        return Ok(Scope::empty());
    }

    let (scope, rest) = value.split_once(SUBSCOPE_DELIMITER).map_or_else(
        || (value.clone(), ""),
        |(scope, rest)| (normalise(scope), rest),
    );
    let permitted = config.permitted_subscopes(&scope);

    if rest.is_empty() {
        return Ok(Scope::from_parts(scope, Vec::new()));
    }

    let subscopes: Vec<String> = rest.split(SUBSCOPE_SEPARATOR).map(normalise).collect();

    if force {
        if scope.is_empty() {
            return Err(ScopeError::MissingPrimary {
                parsed: Scope::from_parts(scope, subscopes),
            });
        }
        return Ok(Scope::from_parts(scope, subscopes));
    }

    let allowed = permitted.unwrap_or_default();
    if let Some(rejected) = subscopes.iter().find(|sub| !allowed.contains(sub)) {
        let expected = if config.is_empty() {
            None
        } else {
            permitted.map(<[String]>::to_vec)
        };
        let info = SubscopeErrorInfo::new(scope.as_str(), rejected.as_str(), expected);
        return Err(ScopeError::InvalidSubscope {
            info,
            parsed: Scope::from_parts(scope, subscopes),
        });
    }

    if permitted.is_none() {
        return Err(ScopeError::InvalidScope {
            parsed: Scope::from_parts(scope, subscopes),
        });
    }

    Ok(Scope::from_parts(scope, subscopes))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise parser fallibility")]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> ScopeConfig {
        [("foo", vec!["bar", "baz", "thwomp"]), ("quux", vec![])]
            .into_iter()
            .collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn empty_input_is_the_empty_scope(config: ScopeConfig, #[case] input: &str) {
        assert_eq!(parse_scope(&config, input, false).unwrap(), Scope::empty());
        assert_eq!(
            parse_scope(&ScopeConfig::default(), input, false).unwrap(),
            Scope::empty()
        );
    }

    #[rstest]
    fn normalises_case_and_whitespace(config: ScopeConfig) {
        let scope = parse_scope(&config, "FOO / Bar, BAZ", false).unwrap();
        assert_eq!(scope.primary(), "foo");
        assert_eq!(scope.subscopes(), ["bar", "baz"]);
    }

    #[rstest]
    fn trailing_delimiter_means_no_subscopes(config: ScopeConfig) {
        let scope = parse_scope(&config, "foo/", false).unwrap();
        assert_eq!(scope.primary(), "foo");
        assert!(scope.subscopes().is_empty());
    }

    #[rstest]
    fn splits_on_first_delimiter_only(config: ScopeConfig) {
        let scope = parse_scope(&config, "foo/bar/baz", true).unwrap();
        assert_eq!(scope.primary(), "foo");
        assert_eq!(scope.subscopes(), ["bar/baz"]);
    }

    #[rstest]
    #[case("misc")]
    #[case("UNKNOWN")]
    fn bare_unknown_scope_is_accepted(config: ScopeConfig, #[case] input: &str) {
        let scope = parse_scope(&config, input, false).unwrap();
        assert_eq!(scope.primary(), input.to_lowercase());
        assert!(scope.subscopes().is_empty());
    }

    #[rstest]
    fn rejects_unlisted_subscope_with_permitted_list(config: ScopeConfig) {
        let err = parse_scope(&config, "foo/bar,nope,baz", false).unwrap_err();
        let ScopeError::InvalidSubscope { info, parsed } = &err else {
            panic!("expected invalid subscope, got {err:?}");
        };
        assert_eq!(info.subscope, "nope");
        assert_eq!(
            info.permitted,
            Some(vec!["bar".into(), "baz".into(), "thwomp".into()])
        );
        assert_eq!(parsed.subscopes(), ["bar", "nope", "baz"]);
    }

    #[rstest]
    fn unknown_scope_with_subscope_expects_none(config: ScopeConfig) {
        let err = parse_scope(&config, "unknown/x", false).unwrap_err();
        assert!(err.to_string().contains("expects none"), "{err}");
        assert_eq!(err.parsed().primary(), "unknown");
    }

    #[test]
    fn empty_config_expects_no_subscopes() {
        let err = parse_scope(&ScopeConfig::default(), "foo/bar", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid subscope `bar` found, scope `foo` expects none"
        );
    }

    #[rstest]
    fn scope_without_subscopes_lists_empty_expectation(config: ScopeConfig) {
        let err = parse_scope(&config, "quux/x", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid subscope `x` found, expected one of: ; or use the force option to override"
        );
    }

    #[rstest]
    fn stray_separator_yields_rejected_empty_token(config: ScopeConfig) {
        let err = parse_scope(&config, "foo/bar,,baz", false).unwrap_err();
        let ScopeError::InvalidSubscope { info, .. } = &err else {
            panic!("expected invalid subscope, got {err:?}");
        };
        assert_eq!(info.subscope, "");
    }

    #[rstest]
    fn force_keeps_unlisted_subscopes_verbatim(config: ScopeConfig) {
        let scope = parse_scope(&config, "Unknown/ Nope ,x", true).unwrap();
        assert_eq!(scope.primary(), "unknown");
        assert_eq!(scope.subscopes(), ["nope", "x"]);
    }

    #[rstest]
    fn orphan_subscopes_fail_subscope_check(config: ScopeConfig) {
        let err = parse_scope(&config, "/bar", false).unwrap_err();
        let ScopeError::InvalidSubscope { info, parsed } = &err else {
            panic!("expected invalid subscope, got {err:?}");
        };
        assert_eq!(info.subscope, "bar");
        assert_eq!(parsed.subscopes(), ["bar"]);
        assert_eq!(
            err.to_string(),
            "invalid subscope `bar` found, scope `` expects none"
        );
    }

    #[test]
    fn orphan_subscopes_fail_against_empty_config() {
        let err = parse_scope(&ScopeConfig::default(), "/bar", false).unwrap_err();
        assert!(matches!(err, ScopeError::InvalidSubscope { .. }), "{err:?}");
    }

    #[rstest]
    fn forced_orphan_subscopes_miss_primary(config: ScopeConfig) {
        let err = parse_scope(&config, "/bar", true).unwrap_err();
        assert!(matches!(err, ScopeError::MissingPrimary { .. }));
    }
}
