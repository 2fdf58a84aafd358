//! Networking modules for the backend REST API and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `api` builds authenticated backend calls,
//! `identity` talks to the sign-in provider, and `types` defines the wire
//! schema.

pub mod api;
pub mod error;
pub mod http;
pub mod identity;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
