//! Structural resolution over a whole request state.
//!
//! Applies string substitution to every textual field of a request while
//! preserving its shape: entry order, `enabled` flags, variant tags, and the
//! transient execution fields all pass through untouched.

use crate::models::request::{
    HeaderEntry, ParamEntry, RequestAuth, RequestBody, RequestState,
};
use crate::scope::resolver::{resolve_string, Scope};

/// Resolves every `{{name}}` placeholder in `state` against `scope` and
/// returns the resolved copy. The input is never mutated.
///
/// Covered fields: the URL, every header key and value, every param key and
/// value, the body variant's textual content, and the auth variant's
/// credentials. The `enabled` flag on header and param rows is preserved
/// verbatim; filtering disabled rows is the dispatch layer's job. The
/// transient `response`, `loading`, and `error` fields are copied through
/// unchanged.
pub fn resolve_request(state: &RequestState, scope: &Scope) -> RequestState {
    RequestState {
        method: state.method,
        url: resolve_string(&state.url, scope),
        headers: resolve_headers(&state.headers, scope),
        params: resolve_entries(&state.params, scope),
        body_config: resolve_body(&state.body_config, scope),
        auth: resolve_auth(&state.auth, scope),
        response: state.response.clone(),
        loading: state.loading,
        error: state.error.clone(),
    }
}

fn resolve_headers(headers: &[HeaderEntry], scope: &Scope) -> Vec<HeaderEntry> {
    headers
        .iter()
        .map(|h| HeaderEntry {
            key: resolve_string(&h.key, scope),
            value: resolve_string(&h.value, scope),
            enabled: h.enabled,
        })
        .collect()
}

fn resolve_entries(entries: &[ParamEntry], scope: &Scope) -> Vec<ParamEntry> {
    entries
        .iter()
        .map(|e| ParamEntry {
            key: resolve_string(&e.key, scope),
            value: resolve_string(&e.value, scope),
            enabled: e.enabled,
        })
        .collect()
}

fn resolve_body(body: &RequestBody, scope: &Scope) -> RequestBody {
    match body {
        RequestBody::None => RequestBody::None,
        RequestBody::Raw { format, content } => RequestBody::Raw {
            format: *format,
            content: resolve_string(content, scope),
        },
        RequestBody::FormData { entries } => RequestBody::FormData {
            entries: resolve_entries(entries, scope),
        },
        RequestBody::XWwwFormUrlencoded { entries } => RequestBody::XWwwFormUrlencoded {
            entries: resolve_entries(entries, scope),
        },
        // The file path is chosen in a picker, not typed; no substitution.
        RequestBody::Binary { file_path } => RequestBody::Binary {
            file_path: file_path.clone(),
        },
    }
}

fn resolve_auth(auth: &RequestAuth, scope: &Scope) -> RequestAuth {
    match auth {
        RequestAuth::None => RequestAuth::None,
        RequestAuth::Bearer { token } => RequestAuth::Bearer {
            token: resolve_string(token, scope),
        },
        RequestAuth::Basic { username, password } => RequestAuth::Basic {
            username: resolve_string(username, scope),
            password: resolve_string(password, scope),
        },
        RequestAuth::Apikey { key, value, add_to } => RequestAuth::Apikey {
            key: resolve_string(key, scope),
            value: resolve_string(value, scope),
            // Routing tag, not text.
            add_to: *add_to,
        },
    }
}
