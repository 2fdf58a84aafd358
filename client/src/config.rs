//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime environment, so endpoints are baked in at
//! compile time through `option_env!`. Unset variables fall back to local
//! development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Endpoints and keys the client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend REST API root, without a trailing slash.
    pub api_base_url: String,
    /// Identity Toolkit REST root, without a trailing slash.
    pub identity_base_url: String,
    /// Public web API key for the identity provider project.
    pub identity_api_key: String,
}

impl ClientConfig {
    /// Read `API_URL`, `IDENTITY_URL` and `FIREBASE_API_KEY` captured at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("IDENTITY_URL"),
            option_env!("FIREBASE_API_KEY"),
        )
    }

    pub(crate) fn from_values(api_url: Option<&str>, identity_url: Option<&str>, api_key: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_url, DEFAULT_API_URL),
            identity_base_url: normalize_base_url(identity_url, DEFAULT_IDENTITY_URL),
            identity_api_key: api_key.map(str::trim).unwrap_or_default().to_owned(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

/// Trim whitespace and trailing slashes; blank input yields `fallback`.
pub(crate) fn normalize_base_url(raw: Option<&str>, fallback: &str) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}
