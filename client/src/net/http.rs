//! HTTP transport seam.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `BrowserTransport` reports `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! `ApiClient` and the identity provider build plain `ApiRequest` values and
//! hand them to a `Transport`. Tests substitute a scripted transport that
//! records every request.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;

use super::error::ApiError;

/// HTTP verbs used by the backend and identity APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-resolved request ready to put on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    /// Bearer token for the `Authorization` header, if the call is authenticated.
    pub bearer: Option<String>,
    /// JSON-encoded body; sent with `Content-Type: application/json`.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), bearer: None, body: None }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_json_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Header pairs the transport must attach, in a stable order.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(token) = &self.bearer {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        headers
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs exactly one HTTP exchange per call. No retries.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns `ApiError::Network` when the exchange does not complete, or
    /// `ApiError::Unavailable` outside the browser. Non-2xx responses are
    /// returned as `Ok` for the caller to interpret.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-backed transport for the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in request.headers() {
                builder = builder.header(name, &value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
