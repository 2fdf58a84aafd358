//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render route guards and list rows while reading/writing shared
//! state from Leptos context providers.

pub mod access_guard;
pub mod post_row;
pub mod spinner;
pub mod user_row;
