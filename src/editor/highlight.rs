//! Placeholder scanning for editor highlighting.
//!
//! Editors render every `{{name}}` occurrence with a resolved or unresolved
//! style, recomputed on each edit. This module does the pure part of that
//! work: finding the occurrences and classifying each against the current
//! scope. Applying decorations is the editor's job.

use crate::scope::resolver::{Scope, PLACEHOLDER_REGEX};

/// One `{{name}}` occurrence in a piece of text.
///
/// `start` and `end` are byte offsets covering the whole occurrence including
/// both delimiters, so `&text[start..end]` is the literal placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpan {
    pub start: usize,
    pub end: usize,
    /// The trimmed name between the delimiters.
    pub name: String,
    /// Whether the name is present in the scope the text was scanned against.
    pub resolved: bool,
}

/// Finds every well-formed placeholder in `text` and classifies it against
/// `scope`.
///
/// Names are trimmed before the membership test, matching how substitution
/// looks them up, so a span reports `resolved` exactly when substitution would
/// replace it. Malformed or nested delimiters yield no span.
pub fn scan_placeholders(text: &str, scope: &Scope) -> Vec<PlaceholderSpan> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| {
            let occurrence = caps.get(0).expect("group 0 always present");
            let name = caps[1].trim().to_string();
            let resolved = scope.contains_key(&name);
            PlaceholderSpan {
                start: occurrence.start(),
                end: occurrence.end(),
                name,
                resolved,
            }
        })
        .collect()
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
    fn test_spans_cover_full_occurrence() {
        let text = "{{base}}/users/{{id}}";
        let spans = scan_placeholders(text, &scope_of(&[("base", "x")]));

        assert_eq!(spans.len(), 2);
        assert_eq!(&text[spans[0].start..spans[0].end], "{{base}}");
        assert_eq!(&text[spans[1].start..spans[1].end], "{{id}}");
    }

    #[test]
    fn test_classifies_resolved_and_unresolved() {
        let spans = scan_placeholders("{{host}}:{{port}}", &scope_of(&[("host", "localhost")]));

        assert_eq!(spans[0].name, "host");
        assert!(spans[0].resolved);
        assert_eq!(spans[1].name, "port");
        assert!(!spans[1].resolved);
    }

    #[test]
    fn test_names_are_trimmed_before_lookup() {
        let spans = scan_placeholders("{{ base }}", &scope_of(&[("base", "x")]));

        assert_eq!(spans[0].name, "base");
        assert!(spans[0].resolved);
    }

    #[test]
    fn test_no_placeholders_yields_no_spans() {
        assert!(scan_placeholders("plain text", &Scope::new()).is_empty());
        assert!(scan_placeholders("", &Scope::new()).is_empty());
    }

    #[test]
    fn test_malformed_patterns_yield_no_spans() {
        let scope = scope_of(&[("a", "1")]);
        assert!(scan_placeholders("{{a", &scope).is_empty());
        assert!(scan_placeholders("{{}}", &scope).is_empty());
        assert!(scan_placeholders("{a}", &scope).is_empty());
    }

    #[test]
    fn test_multibyte_text_keeps_byte_offsets() {
        let text = "héllo {{name}}";
        let spans = scan_placeholders(text, &scope_of(&[("name", "x")]));

        assert_eq!(&text[spans[0].start..spans[0].end], "{{name}}");
    }
}
