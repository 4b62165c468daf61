//! Merging ordered variable sources into a flat scope.
//!
//! A source is one hierarchy level's labeled contribution (the global
//! environment, a selected environment, a collection, a folder, or the
//! request itself). Sources are merged lowest priority first, so a later
//! source overwrites an earlier one key by key, and within a single source a
//! later entry overwrites an earlier duplicate.

use crate::models::workspace::Variable;
use crate::scope::resolver::Scope;
use std::collections::HashMap;

/// One hierarchy level's contribution to a scope.
///
/// Borrows the variable list from the caller's snapshot; nothing is copied
/// until the merge itself.
#[derive(Debug, Clone, Copy)]
pub struct VariableSource<'a> {
    /// Display label for attribution ("Global", an environment name, ...).
    pub label: &'a str,
    /// Ordered variable list; duplicates allowed, last occurrence wins.
    pub variables: &'a [Variable],
}

impl<'a> VariableSource<'a> {
    /// Creates a source from a label and a variable slice.
    pub fn new(label: &'a str, variables: &'a [Variable]) -> Self {
        Self { label, variables }
    }
}

/// Merges sources into a flat name-to-value scope.
///
/// Index 0 is the lowest priority. Variables with an empty key are skipped
/// entirely; they never contribute a scope entry no matter where they appear.
/// No sources, or sources with no valid variable, produce an empty scope.
pub fn build_scope(sources: &[VariableSource<'_>]) -> Scope {
    let mut scope = Scope::new();
    for source in sources {
        for var in source.variables {
            if !var.key.is_empty() {
                scope.insert(var.key.clone(), var.value.clone());
            }
        }
    }
    scope
}

/// A resolved value together with where it came from.
///
/// Attribution is display-only: autocomplete shows the winning source's label
/// and masks secret values. The secret flag never affects resolution itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedVariable {
    pub value: String,
    pub source: String,
    pub secret: bool,
}

/// Scope variant that keeps per-key attribution for display.
pub type AttributedScope = HashMap<String, AttributedVariable>;

/// Same merge as [`build_scope`], additionally recording the winning source's
/// label and secret flag per key.
pub fn build_scope_with_attribution(sources: &[VariableSource<'_>]) -> AttributedScope {
    let mut scope = AttributedScope::new();
    for source in sources {
        for var in source.variables {
            if !var.key.is_empty() {
                scope.insert(
                    var.key.clone(),
                    AttributedVariable {
                        value: var.value.clone(),
                        source: source.label.to_string(),
                        secret: var.secret,
                    },
                );
            }
        }
    }
    scope
}
