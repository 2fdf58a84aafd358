//! Shared auth helpers: the access decision and the sign-in/out flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and auth pages must apply identical session rules, so the
//! decision logic lives here and the components only render its outcome.
//!
//! ERROR HANDLING
//! ==============
//! `check_access` collapses every failure (no token, network, non-2xx,
//! malformed body) into `Unauthenticated`. The stored token is left in place;
//! the next successful sign-in overwrites it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use thiserror::Error;

use crate::net::api::ApiClient;
use crate::net::error::{ApiError, IdentityError};
use crate::net::http::Transport;
use crate::net::identity::{Credential, IdentityProvider};
use crate::net::types::{NewUser, UserProfile};
use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/home";
pub const ADMIN_PATH: &str = "/admin";

/// Result of an access check for a protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Session valid (and privileged enough): render the view.
    Granted(UserProfile),
    /// No token or the backend rejected it.
    Unauthenticated,
    /// Valid session without the admin flag on an admin-only view.
    Forbidden,
}

impl AccessOutcome {
    /// Route to navigate to instead of rendering, if any.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Granted(_) => None,
            Self::Unauthenticated => Some(LOGIN_PATH),
            Self::Forbidden => Some(HOME_PATH),
        }
    }
}

/// Decide whether the current session may see a protected view.
///
/// Issues no request when no token is stored, otherwise exactly one
/// `GET /users/me`.
pub async fn check_access<T: Transport>(api: &ApiClient<T>, require_admin: bool) -> AccessOutcome {
    if !api.session().is_authenticated() {
        log::debug!("access check: no session token");
        return AccessOutcome::Unauthenticated;
    }
    match api.current_user().await {
        Err(e) => {
            log::warn!("access check: session rejected: {e}");
            AccessOutcome::Unauthenticated
        }
        Ok(user) if require_admin && !user.is_admin => {
            log::debug!("access check: user {} lacks admin", user.id);
            AccessOutcome::Forbidden
        }
        Ok(user) => AccessOutcome::Granted(user),
    }
}

/// Sign in with the provider and persist the issued token.
///
/// # Errors
///
/// Returns the provider error; the session is not touched on failure.
pub async fn sign_in<P: IdentityProvider>(
    identity: &P,
    session: &Session,
    email: &str,
    password: &str,
) -> Result<Credential, IdentityError> {
    let credential = identity.authenticate(email, password).await?;
    session.begin(&credential.id_token);
    Ok(credential)
}

/// Registration failure, split by the step that failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Account creation failed: {0}")]
    Identity(#[from] IdentityError),
    #[error("Profile setup failed: {0}")]
    Profile(#[from] ApiError),
}

/// Input collected by the registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Create the provider account, persist its token, then create the backend
/// profile with that token.
///
/// # Errors
///
/// `RegisterError::Identity` if the account could not be created (nothing is
/// stored); `RegisterError::Profile` if the backend profile call failed (the
/// account and token remain).
pub async fn register<P: IdentityProvider, T: Transport>(
    identity: &P,
    api: &ApiClient<T>,
    form: &Registration,
) -> Result<UserProfile, RegisterError> {
    let credential = identity.create_account(&form.email, &form.password).await?;
    api.session().begin(&credential.id_token);
    let profile = NewUser {
        email: credential.email.clone().unwrap_or_else(|| form.email.clone()),
        display_name: form.display_name.clone(),
        bio: form.bio.clone(),
        avatar_url: form.avatar_url.clone(),
    };
    Ok(api.create_user(&profile).await?)
}

/// Sign out of the provider and forget the stored token.
///
/// The token is cleared even if the provider call fails.
pub async fn sign_out<P: IdentityProvider>(identity: &P, session: &Session) {
    if let Err(e) = identity.sign_out().await {
        log::warn!("identity sign-out failed: {e}");
    }
    session.end();
}
