//! Variable resolution and scoping engine for HTTP request workbenches.
//!
//! Users write `{{name}}` placeholders inside the textual fields of a request
//! and define variables at several levels of the workspace: a global
//! environment, the currently selected environment, a collection, a chain of
//! nested folders, and the request itself. This crate merges those levels
//! into a single flat scope with fixed precedence and applies single-pass
//! substitution across a request's text, leaving its shape and transient
//! fields untouched.
//!
//! # Architecture
//!
//! - **models**: request state and workspace snapshot entities (environments,
//!   collections, folders, saved requests)
//! - **scope**: the engine itself - string substitution, source merging,
//!   folder chain walking, precedence assembly, and structural resolution
//! - **editor**: pure helpers for the editor's highlighting of resolved and
//!   unresolved placeholders and for `{{` autocomplete
//!
//! # Resolution walkthrough
//!
//! ```
//! use request_scope::models::{Environment, Folder, RequestState, Variable};
//! use request_scope::scope::{
//!     build_scope_for_request, folder_chain, resolve_request, ScopeContext,
//! };
//!
//! let dev = Environment::new("Dev")
//!     .with_variables(vec![Variable::new("base", "http://localhost:3000")]);
//! let folders = vec![Folder::new("c1", None, "Users")];
//!
//! let chain = folder_chain(Some(folders[0].id.as_str()), &folders);
//! let scope = build_scope_for_request(&ScopeContext {
//!     active_env: Some(&dev),
//!     folder_chain: &chain,
//!     ..Default::default()
//! });
//!
//! let mut state = RequestState::new();
//! state.url = "{{base}}/api/users".to_string();
//!
//! let resolved = resolve_request(&state, &scope);
//! assert_eq!(resolved.url, "http://localhost:3000/api/users");
//! ```
//!
//! Every operation is a pure, total function: unresolved names stay as
//! literal text, dangling folder references shorten the chain, and an empty
//! workspace just yields an empty scope. Callers hand in fresh snapshots per
//! call; nothing is cached between calls.

pub mod editor;
pub mod models;
pub mod scope;

pub use editor::{provide_completions, scan_placeholders, CompletionItem, PlaceholderSpan};
pub use models::{RequestState, Variable, Workspace};
pub use scope::{
    build_attributed_scope_for_request, build_scope, build_scope_for_request,
    build_scope_with_attribution, folder_chain, resolve_request, resolve_string, AttributedScope,
    AttributedVariable, Scope, ScopeContext, VariableSource,
};
