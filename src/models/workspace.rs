//! Workspace data models.
//!
//! These are the entities the workspace store owns: environments, collections,
//! the folder tree, and saved requests. The scope engine receives them as
//! read-only snapshots per call; it never mutates or retains them.
//!
//! Folders form a tree through `parent_folder_id` back-references within one
//! collection, kept as a flat list rather than linked nodes so snapshots stay
//! trivially serializable.

use crate::models::request::{
    HeaderEntry, HttpMethod, ParamEntry, RequestAuth, RequestBody, RequestState,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single key/value variable definition.
///
/// The `secret` flag is advisory and affects display only (autocomplete and
/// editors mask the value). It never changes how the value resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub secret: bool,
}

impl Variable {
    /// Creates a non-secret variable.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            secret: false,
        }
    }

    /// Creates a secret variable.
    pub fn secret(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            secret: true,
        }
    }
}

/// A named set of variables the user can switch between (dev, staging, ...).
///
/// At most one environment is flagged global; its variables apply regardless
/// of which environment is currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub variables: Vec<Variable>,
    pub is_global: bool,
    pub sort_order: i64,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Environment {
    /// Creates an empty non-global environment with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            variables: Vec::new(),
            is_global: false,
            sort_order: 0,
            updated_at: now,
            created_at: now,
        }
    }

    /// Creates the workspace's global environment.
    pub fn new_global(name: impl Into<String>) -> Self {
        Self {
            is_global: true,
            ..Self::new(name)
        }
    }

    /// Replaces the variable list, builder style.
    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }
}

/// A top-level group of folders and requests.
///
/// `default_headers` and `default_auth` are inherited by contained requests at
/// dispatch time; that inheritance is separate from variable scoping and the
/// scope engine does not merge them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: String,
    pub variables: Vec<Variable>,
    pub default_headers: Vec<HeaderEntry>,
    pub default_auth: RequestAuth,
    pub sort_order: i64,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    /// Creates an empty collection with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: String::new(),
            variables: Vec::new(),
            default_headers: Vec::new(),
            default_auth: RequestAuth::None,
            sort_order: 0,
            updated_at: now,
            created_at: now,
        }
    }

    /// Replaces the variable list, builder style.
    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }
}

/// A folder inside a collection.
///
/// `parent_folder_id` is `None` for folders directly under the collection
/// root. The store guarantees an acyclic parent relation; the chain walker
/// still guards against corruption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub collection_id: String,
    pub parent_folder_id: Option<String>,
    pub name: String,
    pub variables: Vec<Variable>,
    pub default_headers: Vec<HeaderEntry>,
    pub default_auth: RequestAuth,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Creates an empty folder with a fresh id.
    pub fn new(
        collection_id: impl Into<String>,
        parent_folder_id: Option<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            collection_id: collection_id.into(),
            parent_folder_id,
            name: name.into(),
            variables: Vec::new(),
            default_headers: Vec::new(),
            default_auth: RequestAuth::None,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    /// Replaces the variable list, builder style.
    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }
}

/// A request saved into a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRequest {
    pub id: String,
    pub collection_id: String,
    pub folder_id: Option<String>,
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<HeaderEntry>,
    pub params: Vec<ParamEntry>,
    pub body: RequestBody,
    pub auth: RequestAuth,
    pub sort_order: i64,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl SavedRequest {
    /// Creates an empty GET request saved at the collection root.
    pub fn new(collection_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            collection_id: collection_id.into(),
            folder_id: None,
            name: name.into(),
            method: HttpMethod::GET,
            url: String::new(),
            headers: Vec::new(),
            params: Vec::new(),
            body: RequestBody::None,
            auth: RequestAuth::None,
            sort_order: 0,
            updated_at: now,
            created_at: now,
        }
    }

    /// Builds the tab state for opening this request in the editor.
    pub fn to_state(&self) -> RequestState {
        RequestState {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            params: self.params.clone(),
            body_config: self.body.clone(),
            auth: self.auth.clone(),
            response: None,
            loading: false,
            error: None,
        }
    }
}

/// One workspace snapshot: every collection, folder, and saved request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub collections: Vec<Collection>,
    pub folders: Vec<Folder>,
    pub requests: Vec<SavedRequest>,
}

impl Workspace {
    /// Looks up a collection by id.
    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Looks up a folder by id.
    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Looks up a saved request by id.
    pub fn request(&self, id: &str) -> Option<&SavedRequest> {
        self.requests.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_secret_defaults_to_false() {
        let var: Variable = serde_json::from_str(r#"{"key": "a", "value": "1"}"#).unwrap();
        assert_eq!(var.key, "a");
        assert!(!var.secret);

        let var: Variable =
            serde_json::from_str(r#"{"key": "t", "value": "x", "secret": true}"#).unwrap();
        assert!(var.secret);
    }

    #[test]
    fn test_environment_constructors() {
        let env = Environment::new("Dev");
        assert!(!env.is_global);
        assert!(env.variables.is_empty());

        let global = Environment::new_global("Globals");
        assert!(global.is_global);
        assert_ne!(global.id, env.id);
    }

    #[test]
    fn test_folder_serializes_camel_case() {
        let folder = Folder::new("c1", Some("parent".to_string()), "Users");
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(json["collectionId"], "c1");
        assert_eq!(json["parentFolderId"], "parent");
    }

    #[test]
    fn test_saved_request_to_state_drops_transients() {
        let mut saved = SavedRequest::new("c1", "List users");
        saved.url = "{{base}}/users".to_string();
        saved.auth = RequestAuth::Bearer {
            token: "{{token}}".to_string(),
        };

        let state = saved.to_state();
        assert_eq!(state.url, saved.url);
        assert_eq!(state.auth, saved.auth);
        assert_eq!(state.response, None);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_workspace_lookups() {
        let collection = Collection::new("API");
        let folder = Folder::new(&collection.id, None, "Users");
        let request = SavedRequest::new(&collection.id, "List");

        let workspace = Workspace {
            collections: vec![collection.clone()],
            folders: vec![folder.clone()],
            requests: vec![request.clone()],
        };

        assert_eq!(workspace.collection(&collection.id), Some(&collection));
        assert_eq!(workspace.folder(&folder.id), Some(&folder));
        assert_eq!(workspace.request(&request.id), Some(&request));
        assert_eq!(workspace.folder("missing"), None);
    }
}
