//! Variable scoping and resolution engine.
//!
//! This module turns the workspace's layered variable definitions into a flat
//! lookup scope and applies `{{name}}` substitution across request text:
//!
//! - **resolver**: single-pass substitution over one string
//! - **builder**: ordered merge of labeled variable sources
//! - **folders**: root-first ancestor chains over the folder arena
//! - **assembler**: canonical precedence ordering for one request context
//! - **request**: structural substitution over a whole request state
//!
//! Every operation is a pure function over read-only snapshots: no I/O, no
//! caching, no shared state. Callers rebuild scopes as often as they like,
//! typically on every keystroke.

pub mod assembler;
pub mod builder;
pub mod folders;
pub mod request;
pub mod resolver;

pub use assembler::{build_attributed_scope_for_request, build_scope_for_request, ScopeContext};
pub use builder::{
    build_scope, build_scope_with_attribution, AttributedScope, AttributedVariable, VariableSource,
};
pub use folders::folder_chain;
pub use request::resolve_request;
pub use resolver::{resolve_string, Scope};
