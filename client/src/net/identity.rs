//! Identity-provider capability and its Firebase Identity Toolkit client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages sign users in and out only through `IdentityProvider`, so swapping
//! the provider means supplying another implementation to the app context.
//! The Firebase client speaks the public REST API (`accounts:signInWithPassword`
//! and `accounts:signUp`) over the same `Transport` seam the backend client uses.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, IdentityError};
use super::http::{ApiRequest, BrowserTransport, Method, Transport};

/// Identity client used by the browser app.
pub type BrowserIdentity = FirebaseIdentity<BrowserTransport>;

/// Tokens and account data issued on a successful sign-in or sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Bearer token presented to the backend.
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Provider-side user id.
    #[serde(rename = "localId")]
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Minimal sign-in capability the views depend on.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Rejected` for bad credentials.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Credential, IdentityError>;

    /// Create a new account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Rejected` if the provider refuses the account
    /// (e.g. `EMAIL_EXISTS`, `WEAK_PASSWORD`).
    async fn create_account(&self, email: &str, password: &str) -> Result<Credential, IdentityError>;

    /// Bearer token of the user signed in through this provider instance.
    async fn current_session_token(&self) -> Option<String>;

    /// Forget the signed-in user.
    ///
    /// # Errors
    ///
    /// Implementations backed by a remote sign-out may report transport errors.
    async fn sign_out(&self) -> Result<(), IdentityError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Firebase Identity Toolkit REST client.
#[derive(Clone, Debug)]
pub struct FirebaseIdentity<T> {
    base_url: String,
    api_key: String,
    transport: T,
    current: Arc<Mutex<Option<Credential>>>,
}

impl<T: Transport> FirebaseIdentity<T> {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            transport,
            current: Arc::new(Mutex::new(None)),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn action_url(&self, action: &str) -> String {
        format!(
            "{}/accounts:{action}?key={}",
            self.base_url,
            urlencoding::encode(&self.api_key)
        )
    }

    async fn password_exchange(&self, action: &str, email: &str, password: &str) -> Result<Credential, IdentityError> {
        let body = serde_json::to_string(&PasswordRequest { email, password, return_secure_token: true })
            .map_err(|e| IdentityError::Decode(e.to_string()))?;
        let request = ApiRequest::new(Method::Post, self.action_url(action)).with_json_body(body);
        let resp = self.transport.send(request).await.map_err(|e| match e {
            ApiError::Unavailable => IdentityError::Unavailable,
            other => IdentityError::Network(other.to_string()),
        })?;
        if !resp.ok() {
            return Err(provider_rejection(resp.status, &resp.body));
        }
        let credential: Credential =
            serde_json::from_str(&resp.body).map_err(|e| IdentityError::Decode(e.to_string()))?;
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(credential.clone());
        Ok(credential)
    }
}

/// Map a provider error body to `Rejected`, keeping the provider's code.
fn provider_rejection(status: u16, body: &str) -> IdentityError {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(parsed) => IdentityError::Rejected(parsed.error.message),
        Err(_) => IdentityError::Rejected(format!("identity provider returned {status}")),
    }
}

#[async_trait(?Send)]
impl<T: Transport> IdentityProvider for FirebaseIdentity<T> {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Credential, IdentityError> {
        self.password_exchange("signInWithPassword", email, password).await
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<Credential, IdentityError> {
        self.password_exchange("signUp", email, password).await
    }

    async fn current_session_token(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|c| c.id_token.clone())
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
