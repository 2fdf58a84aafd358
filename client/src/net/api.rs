//! REST API helpers for communicating with the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through `ApiClient::authorized`, which reads the
//! bearer token from the shared `Session` at send time. Call sites never touch
//! storage or headers themselves.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so auth/profile fetch
//! failures degrade UI behavior without crashing hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{ApiRequest, BrowserTransport, Method, Transport};
use super::types::{NewUser, Post, ProfileUpdate, PromoteRequest, UserProfile};
use crate::state::session::Session;

/// Backend client used by the browser app.
pub type BrowserApi = ApiClient<BrowserTransport>;

fn current_user_path() -> &'static str {
    "/users/me"
}

fn create_user_path() -> &'static str {
    "/users/"
}

fn user_path(key: &str) -> String {
    format!("/users/{}", urlencoding::encode(key))
}

fn admin_users_path() -> &'static str {
    "/admin/users"
}

fn admin_user_path(key: &str) -> String {
    format!("/admin/users/{}", urlencoding::encode(key))
}

fn promote_user_path(key: &str) -> String {
    format!("/admin/promote-user/{}", urlencoding::encode(key))
}

fn admin_posts_path() -> &'static str {
    "/admin/posts"
}

fn flagged_posts_path() -> &'static str {
    "/admin/flagged-posts"
}

fn admin_post_path(id: &str) -> String {
    format!("/admin/posts/{}", urlencoding::encode(id))
}

/// Authenticated client for the backend REST API.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    session: Session,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// `base_url` must already be normalized (no trailing slash).
    pub fn new(base_url: impl Into<String>, session: Session, transport: T) -> Self {
        Self { base_url: base_url.into(), session, transport }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Build a request carrying the session's bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthenticated` when no token is stored; nothing is
    /// sent in that case.
    pub fn authorized(&self, method: Method, path: &str) -> Result<ApiRequest, ApiError> {
        let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
        Ok(ApiRequest::new(method, self.endpoint(path)).with_bearer(token))
    }

    fn authorized_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<ApiRequest, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(self.authorized(method, path)?.with_json_body(encoded))
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            log::warn!("{} {url} failed with status {}", method.as_str(), resp.status);
            return Err(ApiError::from_status(resp.status, &resp.body));
        }
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            log::warn!("{} {url} failed with status {}", method.as_str(), resp.status);
            return Err(ApiError::from_status(resp.status, &resp.body));
        }
        Ok(())
    }

    /// `GET /users/me`: the profile behind the current session.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is stored, the request fails, the status is
    /// non-2xx, or the body is not a profile.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        let request = self.authorized(Method::Get, current_user_path())?;
        self.fetch_json(request).await
    }

    /// `POST /users/`: create the backend profile for a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the payload.
    pub async fn create_user(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        let request = self.authorized_json(Method::Post, create_user_path(), user)?;
        self.fetch_json(request).await
    }

    /// `PUT /users/{key}`: update the caller's own profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the update.
    pub async fn update_profile(&self, key: &str, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let request = self.authorized_json(Method::Put, &user_path(key), update)?;
        self.fetch_json(request).await
    }

    /// `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller is not an admin.
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        let request = self.authorized(Method::Get, admin_users_path())?;
        self.fetch_json(request).await
    }

    /// `DELETE /admin/users/{key}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server refuses the delete.
    pub async fn delete_user(&self, key: &str) -> Result<(), ApiError> {
        let request = self.authorized(Method::Delete, &admin_user_path(key))?;
        self.fetch_empty(request).await
    }

    /// `POST /admin/promote-user/{key}` with `{ "admin": admin }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller may not change roles.
    pub async fn set_admin(&self, key: &str, admin: bool) -> Result<(), ApiError> {
        let request = self.authorized_json(Method::Post, &promote_user_path(key), &PromoteRequest { admin })?;
        self.fetch_empty(request).await
    }

    /// `GET /admin/posts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller is not an admin.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let request = self.authorized(Method::Get, admin_posts_path())?;
        self.fetch_json(request).await
    }

    /// `GET /admin/flagged-posts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller is not an admin.
    pub async fn list_flagged_posts(&self) -> Result<Vec<Post>, ApiError> {
        let request = self.authorized(Method::Get, flagged_posts_path())?;
        self.fetch_json(request).await
    }

    /// `DELETE /admin/posts/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server refuses the delete.
    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        let request = self.authorized(Method::Delete, &admin_post_path(id))?;
        self.fetch_empty(request).await
    }
}
