//! Canonical source ordering for one request's scope.
//!
//! The assembler fixes the precedence chain, lowest priority first: the global
//! environment, the selected environment, the collection, each folder from the
//! collection root down to the request's own folder, and finally the request's
//! local variables. The actual merge is delegated to the scope builder, so the
//! override rules live in exactly one place.

use crate::models::workspace::{Collection, Environment, Folder, Variable};
use crate::scope::builder::{
    build_scope, build_scope_with_attribution, AttributedScope, VariableSource,
};
use crate::scope::resolver::Scope;

/// Everything that can contribute variables to one request's scope.
///
/// All fields are borrowed snapshots; absent levels are simply left out of the
/// merge. `folder_chain` must already be ordered root-first, as produced by
/// [`crate::scope::folders::folder_chain`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeContext<'a> {
    /// The environment flagged global, if the workspace has one.
    pub global_env: Option<&'a Environment>,
    /// The currently selected environment, if any.
    pub active_env: Option<&'a Environment>,
    /// The collection containing the request, if it is saved in one.
    pub collection: Option<&'a Collection>,
    /// Ancestor folders, root-first.
    pub folder_chain: &'a [&'a Folder],
    /// Request-local overrides; the highest-priority source.
    pub request_variables: &'a [Variable],
}

/// Lays out the present sources in canonical order, lowest priority first.
///
/// The global environment is always included when it exists, under the fixed
/// label "Global". The selected environment is skipped when it is itself the
/// global one, which would otherwise be merged twice. Request variables only
/// form a source when the list is non-empty.
fn source_order<'a>(ctx: &ScopeContext<'a>) -> Vec<VariableSource<'a>> {
    let mut sources = Vec::new();

    if let Some(env) = ctx.global_env {
        sources.push(VariableSource::new("Global", &env.variables));
    }
    if let Some(env) = ctx.active_env {
        if !env.is_global {
            sources.push(VariableSource::new(&env.name, &env.variables));
        }
    }
    if let Some(collection) = ctx.collection {
        sources.push(VariableSource::new(&collection.name, &collection.variables));
    }
    for folder in ctx.folder_chain {
        sources.push(VariableSource::new(&folder.name, &folder.variables));
    }
    if !ctx.request_variables.is_empty() {
        sources.push(VariableSource::new("Request", ctx.request_variables));
    }

    sources
}

/// Builds the flat scope for a request context.
///
/// Net precedence, highest wins: request > leaf folder > ... > root folder >
/// collection > selected environment > global. A key unique to any single
/// level stays visible regardless of that level's rank.
pub fn build_scope_for_request(ctx: &ScopeContext<'_>) -> Scope {
    build_scope(&source_order(ctx))
}

/// Builds the attributed scope for a request context, for autocomplete and
/// other display surfaces.
pub fn build_attributed_scope_for_request(ctx: &ScopeContext<'_>) -> AttributedScope {
    build_scope_with_attribution(&source_order(ctx))
}
