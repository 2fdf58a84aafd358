//! Admin dashboard state and moderation actions.
//!
//! DESIGN
//! ======
//! Actions talk to the backend and return an `AdminChange`; the page applies
//! it to its `RwSignal<AdminState>` with `AdminState::apply`. Lists are only
//! changed after the server confirms, so a failed mutation leaves the view as
//! it was.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::{Post, UserProfile};

/// Tabs of the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Users,
    Posts,
    Flagged,
}

impl AdminTab {
    pub const ALL: [Self; 3] = [Self::Users, Self::Posts, Self::Flagged];

    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Posts => "All Posts",
            Self::Flagged => "Flagged Posts",
        }
    }
}

/// Lists shown on the dashboard, mirroring the last successful fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminState {
    pub users: Vec<UserProfile>,
    pub posts: Vec<Post>,
    pub flagged: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
}

/// A confirmed server-side change to mirror locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminChange {
    Loaded { users: Vec<UserProfile>, posts: Vec<Post>, flagged: Vec<Post>, error: Option<String> },
    UserRemoved(String),
    UsersReplaced(Vec<UserProfile>),
    PostRemoved(String),
}

impl AdminState {
    pub fn apply(&mut self, change: AdminChange) {
        match change {
            AdminChange::Loaded { users, posts, flagged, error } => {
                self.users = users;
                self.posts = posts;
                self.flagged = flagged;
                self.error = error;
                self.loading = false;
            }
            AdminChange::UserRemoved(id) => self.users.retain(|u| u.id != id),
            AdminChange::UsersReplaced(users) => self.users = users,
            AdminChange::PostRemoved(id) => {
                self.posts.retain(|p| p.id != id);
                self.flagged.retain(|p| p.id != id);
            }
        }
    }

    /// Record a failed action for the error banner.
    pub fn fail(&mut self, action: &str, error: &ApiError) {
        self.error = Some(format!("{action} failed: {error}"));
    }
}

/// Fetch users, all posts and flagged posts, one request after another.
///
/// A list whose request fails stays empty and its failure is reported in the
/// change's `error`; the other lists still load.
pub async fn load_dashboard<T: Transport>(api: &ApiClient<T>) -> AdminChange {
    let mut failures = Vec::new();

    let users = api.list_users().await.unwrap_or_else(|e| {
        failures.push(format!("users: {e}"));
        Vec::new()
    });
    let posts = api.list_posts().await.unwrap_or_else(|e| {
        failures.push(format!("posts: {e}"));
        Vec::new()
    });
    let flagged = api.list_flagged_posts().await.unwrap_or_else(|e| {
        failures.push(format!("flagged posts: {e}"));
        Vec::new()
    });

    let error = if failures.is_empty() {
        None
    } else {
        log::warn!("admin dashboard load incomplete: {}", failures.join(", "));
        Some(format!("Could not load {}", failures.join("; ")))
    };
    AdminChange::Loaded { users, posts, flagged, error }
}

/// Delete `user` with a single request; on success remove exactly that id.
///
/// # Errors
///
/// Returns the backend error; the list is left untouched.
pub async fn delete_user<T: Transport>(api: &ApiClient<T>, user: &UserProfile) -> Result<AdminChange, ApiError> {
    api.delete_user(user.remote_key()).await?;
    Ok(AdminChange::UserRemoved(user.id.clone()))
}

/// Grant or revoke admin for `user`, then re-fetch the full user list.
///
/// # Errors
///
/// Returns the error of the role change or of the re-fetch.
pub async fn set_admin<T: Transport>(
    api: &ApiClient<T>,
    user: &UserProfile,
    make_admin: bool,
) -> Result<AdminChange, ApiError> {
    api.set_admin(user.remote_key(), make_admin).await?;
    let users = api.list_users().await?;
    Ok(AdminChange::UsersReplaced(users))
}

/// Delete a post; on success it disappears from both post lists.
///
/// # Errors
///
/// Returns the backend error; the lists are left untouched.
pub async fn delete_post<T: Transport>(api: &ApiClient<T>, post_id: &str) -> Result<AdminChange, ApiError> {
    api.delete_post(post_id).await?;
    Ok(AdminChange::PostRemoved(post_id.to_owned()))
}
