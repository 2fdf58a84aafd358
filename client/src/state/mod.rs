//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `admin`) so individual
//! pages can depend on small focused models.

pub mod admin;
pub mod auth;
pub mod session;
