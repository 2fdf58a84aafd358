//! Error types for backend and identity-provider calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is handled at its call site: the guard collapses them into a
//! login redirect, forms and the admin panel render the `Display` text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure talking to the backend REST API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No session token is stored; the request was never sent.
    #[error("not signed in")]
    Unauthenticated,
    /// The request did not complete (DNS, CORS, offline, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed ({status}){}", detail_suffix(.message))]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling a FastAPI-style `detail` out of `body`.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: detail_message(body) }
    }

    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure talking to the identity provider.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider refused the credentials or request (e.g. `EMAIL_NOT_FOUND`).
    #[error("{0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

fn detail_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Extract `detail` from `{"detail": "..."}` or `{"detail": [{"msg": "..."}]}`.
fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}
