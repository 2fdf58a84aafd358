//! Auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the access guard once `/users/me` succeeds and read by pages that
//! greet the user or show admin-only affordances.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Drop the cached profile (sign-out).
    pub fn reset(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
