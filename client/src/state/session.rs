//! Session token state shared by every authenticated request.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token lives in `localStorage` under a fixed key so a reload keeps
//! the user signed in. `Session` is the only reader/writer; `ApiClient` reads
//! it at send time and the auth flows write it.
//!
//! TRADE-OFFS
//! ==========
//! Storage is not synchronized across tabs. Concurrent sign-ins race and the
//! last write wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persistence backend for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Browser `localStorage` store. No-ops outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Log a failed `localStorage` write; returns whether it went through.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn storage_write_ok<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to {action} session token: {e:?}");
            false
        }
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                storage_write_ok("persist", storage.set_item(TOKEN_STORAGE_KEY, token));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                storage_write_ok("remove", storage.remove_item(TOKEN_STORAGE_KEY));
            }
        }
    }
}

/// Process-local store used by tests and non-browser renders.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Handle to the current session token. Cheap to clone; clones share storage.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session persisted in browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserTokenStore)
    }

    /// Empty in-memory session.
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Current bearer token. Blank stored values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store
            .load()
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token, replacing any previous one.
    pub fn begin(&self, token: &str) {
        self.store.save(token);
    }

    /// Forget the token (sign-out).
    pub fn end(&self) {
        self.store.clear();
    }
}
