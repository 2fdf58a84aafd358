//! Startup and serve failures of the host binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
