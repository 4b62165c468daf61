//! Variable completion for `{{` autocomplete.
//!
//! When the user types `{{` the editor asks for the variables visible at the
//! current request, filtered by whatever has been typed after the delimiter.
//! Items carry the winning source's label so the popup can show where a value
//! comes from, and secret values are masked before they ever reach the UI.

use crate::scope::builder::AttributedScope;

/// Replacement shown in place of a secret's value.
pub const SECRET_MASK: &str = "•••";

/// One entry in the variable completion popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// The variable name.
    pub label: String,
    /// The value, or [`SECRET_MASK`] when the variable is secret.
    pub detail: String,
    /// Label of the source the value resolves from.
    pub source: String,
    /// Full placeholder text to insert, delimiters included.
    pub insert_text: String,
}

/// Returns completion items for the variables in `scope` whose name contains
/// `prefix`, sorted by name.
///
/// The prefix is trimmed and matched case-insensitively anywhere in the name;
/// an empty prefix returns every variable. Secret values are masked in
/// `detail` but the item still inserts the placeholder normally, since the
/// secret flag only governs display.
pub fn provide_completions(prefix: &str, scope: &AttributedScope) -> Vec<CompletionItem> {
    let needle = prefix.trim().to_lowercase();

    let mut items: Vec<CompletionItem> = scope
        .iter()
        .filter(|(name, _)| needle.is_empty() || name.to_lowercase().contains(&needle))
        .map(|(name, var)| CompletionItem {
            label: name.clone(),
            detail: if var.secret {
                SECRET_MASK.to_string()
            } else {
                var.value.clone()
            },
            source: var.source.clone(),
            insert_text: format!("{{{{{name}}}}}"),
        })
        .collect();

    items.sort_by(|a, b| a.label.cmp(&b.label));
    items
}
