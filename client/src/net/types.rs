//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! The backend has shipped several schema revisions (numeric vs string ids,
//! `content` vs `caption`, optional `is_admin`). Deserialization accepts all
//! of them so a schema drift degrades display rather than failing the guard.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A user record as returned by `/users/me` and `/admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend identifier (numeric ids are carried as strings).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Sole authorization signal for privileged views.
    #[serde(default)]
    pub is_admin: bool,
    /// Identity-provider uid, when the backend exposes it.
    #[serde(default)]
    pub firebase_uid: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Display-only role label (e.g. `"creator"`, `"regular"`).
    #[serde(default)]
    pub role: Option<String>,
    /// Display-only account status (e.g. `"active"`, `"suspended"`).
    #[serde(default)]
    pub status: Option<String>,
}

impl UserProfile {
    /// Path key for `/users/{key}` and `/admin/.../{key}` routes.
    ///
    /// The backend keys these routes by identity-provider uid; records without
    /// one fall back to the backend id.
    pub fn remote_key(&self) -> &str {
        self.firebase_uid
            .as_deref()
            .filter(|uid| !uid.is_empty())
            .unwrap_or(&self.id)
    }

    /// Name to greet the user with.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

/// A post as listed in the admin panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "content")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub flagged: Option<bool>,
}

impl Post {
    /// Caption text for display; empty captions render a placeholder.
    pub fn caption_text(&self) -> &str {
        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("(no caption)")
    }

    /// `true` only when the backend explicitly marked the post as flagged.
    pub fn is_flagged(&self) -> bool {
        self.flagged == Some(true)
    }
}

/// Body of `POST /users/` sent right after account creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body of `PUT /users/{key}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body of `POST /admin/promote-user/{key}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoteRequest {
    pub admin: bool,
}

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => id_from_value::<D::Error>(value).map(Some),
    }
}
