//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages are wrapped in `AccessGuard` by the router.

pub mod admin;
pub mod home;
pub mod login;
pub mod register;
