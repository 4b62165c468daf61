//! Request data models.
//!
//! This module defines the structures that make up an editable HTTP request:
//! the method, URL, header and query parameter entries, the body and auth
//! variants, and the per-tab request state that bundles them together with
//! transient execution results.
//!
//! Textual fields in these structures may contain `{{variableName}}`
//! placeholders that are substituted by the scope engine before dispatch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
    /// HTTP OPTIONS method - describe communication options
    OPTIONS,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }

    /// Parses a string into an HttpMethod, accepting any casing.
    ///
    /// Returns `None` if the string is not a supported method.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "PATCH" => Some(HttpMethod::PATCH),
            "DELETE" => Some(HttpMethod::DELETE),
            "HEAD" => Some(HttpMethod::HEAD),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single header row in the request editor.
///
/// The `enabled` flag only marks whether the row participates in dispatch;
/// disabled rows are still stored, edited, and variable-resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

impl HeaderEntry {
    /// Creates an enabled header entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

/// A single query parameter or form field row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamEntry {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

impl ParamEntry {
    /// Creates an enabled param entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

/// Syntax tag for a raw body, used for editor highlighting and the
/// Content-Type default applied at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawFormat {
    Json,
    Xml,
    Text,
}

/// Request body configuration.
///
/// Serialized with an internal `type` tag so stored requests round-trip
/// through the same JSON shape the store and UI exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RequestBody {
    None,
    Raw {
        format: RawFormat,
        content: String,
    },
    FormData {
        entries: Vec<ParamEntry>,
    },
    XWwwFormUrlencoded {
        entries: Vec<ParamEntry>,
    },
    Binary {
        #[serde(rename = "filePath")]
        file_path: String,
    },
}

/// Where an API key credential is injected at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
    Query,
}

/// Request authentication configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RequestAuth {
    None,
    Bearer {
        token: String,
    },
    Basic {
        username: String,
        password: String,
    },
    Apikey {
        key: String,
        value: String,
        #[serde(rename = "addTo")]
        add_to: ApiKeyLocation,
    },
}

/// An HTTP response as reported back by the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub time_ms: u64,
    pub size_bytes: u64,
}

/// The full editable state of one open request tab.
///
/// `response`, `loading`, and `error` are transient execution state. They are
/// never persisted with the request and never touched by variable resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestState {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<HeaderEntry>,
    pub params: Vec<ParamEntry>,
    pub body_config: RequestBody,
    pub auth: RequestAuth,
    pub response: Option<HttpResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RequestState {
    /// Creates an empty GET request state.
    pub fn new() -> Self {
        Self {
            method: HttpMethod::GET,
            url: String::new(),
            headers: Vec::new(),
            params: Vec::new(),
            body_config: RequestBody::None,
            auth: RequestAuth::None,
            response: None,
            loading: false,
            error: None,
        }
    }
}

impl Default for RequestState {
    fn default() -> Self {
        Self::new()
    }
}
