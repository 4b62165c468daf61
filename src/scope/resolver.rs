//! Single-pass `{{name}}` substitution over one string.
//!
//! This is the leaf of the scope engine: given a flat name-to-value map, it
//! replaces every well-formed placeholder whose name is in scope and leaves
//! everything else byte-for-byte unchanged. Names that fail to resolve are not
//! errors; the literal placeholder text simply survives into the output.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Flat variable lookup map for one resolution call.
///
/// Built fresh per call by the scope builder; never cached or persisted.
pub type Scope = HashMap<String, String>;

/// Cached pattern for `{{name}}` placeholders.
///
/// The inner text may not contain braces, so an unterminated `{{` or a nested
/// delimiter never matches and passes through as literal text.
pub(crate) static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]+?)\}\}").expect("placeholder pattern compiles"));

/// Replaces every `{{name}}` placeholder in `input` with its scope value.
///
/// The captured name is trimmed before lookup, so `{{ base_url }}` and
/// `{{base_url}}` resolve identically. Unknown names keep their literal
/// placeholder text. Substitution is single-pass: replacement values are never
/// re-scanned, even when they themselves look like `{{...}}`, which keeps the
/// cost linear in the input length and rules out self-referential expansion.
///
/// # Examples
///
/// ```
/// use request_scope::scope::{resolve_string, Scope};
///
/// let mut scope = Scope::new();
/// scope.insert("base".to_string(), "http://localhost:3000".to_string());
///
/// assert_eq!(resolve_string("{{base}}/users", &scope), "http://localhost:3000/users");
/// assert_eq!(resolve_string("{{missing}}/users", &scope), "{{missing}}/users");
/// ```
pub fn resolve_string(input: &str, scope: &Scope) -> String {
    // Fast path: no opening delimiter means nothing can match.
    if !input.contains("{{") {
        return input.to_string();
    }

    PLACEHOLDER_REGEX
        .replace_all(input, |caps: &Captures| {
            let name = caps[1].trim();
            match scope.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_of(pairs: &[(&str, &str)]) -> Scope {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolves_single_variable() {
        let scope = scope_of(&[("base_url", "http://localhost:3000")]);
        assert_eq!(
            resolve_string("{{base_url}}/users", &scope),
            "http://localhost:3000/users"
        );
    }

    #[test]
    fn test_resolves_multiple_variables() {
        let scope = scope_of(&[("host", "api.example.com"), ("version", "v2")]);
        assert_eq!(
            resolve_string("https://{{host}}/{{version}}/users", &scope),
            "https://api.example.com/v2/users"
        );
    }

    #[test]
    fn test_unresolved_variable_stays_literal() {
        let scope = scope_of(&[("host", "localhost")]);
        assert_eq!(
            resolve_string("{{host}}:{{port}}", &scope),
            "localhost:{{port}}"
        );
    }

    #[test]
    fn test_no_variables_is_identity() {
        let scope = Scope::new();
        assert_eq!(resolve_string("hello world", &scope), "hello world");
    }

    #[test]
    fn test_empty_input() {
        let scope = scope_of(&[("x", "y")]);
        assert_eq!(resolve_string("", &scope), "");
    }

    #[test]
    fn test_trims_whitespace_in_names() {
        let scope = scope_of(&[("name", "value")]);
        assert_eq!(resolve_string("{{ name }}", &scope), "value");
        assert_eq!(resolve_string("{{  name  }}", &scope), "value");
    }

    #[test]
    fn test_single_pass_does_not_rescan_values() {
        let scope = scope_of(&[("a", "{{b}}"), ("b", "resolved")]);
        // {{a}} becomes "{{b}}" and is not resolved again.
        assert_eq!(resolve_string("{{a}}", &scope), "{{b}}");
    }

    #[test]
    fn test_adjacent_variables() {
        let scope = scope_of(&[("a", "1"), ("b", "2")]);
        assert_eq!(resolve_string("{{a}}{{b}}", &scope), "12");
    }

    #[test]
    fn test_repeated_variable() {
        let scope = scope_of(&[("base", "x.com")]);
        assert_eq!(
            resolve_string("{{base}}/a and {{base}}/b", &scope),
            "x.com/a and x.com/b"
        );
    }

    #[test]
    fn test_malformed_patterns_pass_through() {
        let scope = scope_of(&[("a", "1")]);
        assert_eq!(resolve_string("{{a", &scope), "{{a");
        assert_eq!(resolve_string("{{}}", &scope), "{{}}");
        assert_eq!(resolve_string("{ {a} }", &scope), "{ {a} }");
        // Inner braces keep the outer pattern from matching.
        assert_eq!(resolve_string("{{a{b}}", &scope), "{{a{b}}");
    }

    #[test]
    fn test_triple_brace_matches_inner_occurrence() {
        // The match anchors at offset 1 where a clean "{{a}}" begins; the
        // outer braces survive as literals.
        let scope = scope_of(&[("a", "1")]);
        assert_eq!(resolve_string("{{{a}}}", &scope), "{1}");
    }

    #[test]
    fn test_whitespace_only_name_stays_literal() {
        // "{{   }}" trims to the empty name, which scopes built by the
        // builder never contain.
        let scope = scope_of(&[("a", "1")]);
        assert_eq!(resolve_string("{{   }}", &scope), "{{   }}");
    }
}
