//! Data models for requests and workspace entities.
//!
//! This module contains the core data structures exchanged with the workspace
//! store: editable request state on one side, and the environment, collection,
//! folder, and saved-request snapshots the scope engine reads on the other.

pub mod request;
pub mod workspace;

pub use request::{
    ApiKeyLocation, HeaderEntry, HttpMethod, HttpResponse, ParamEntry, RawFormat, RequestAuth,
    RequestBody, RequestState,
};
pub use workspace::{Collection, Environment, Folder, SavedRequest, Variable, Workspace};
