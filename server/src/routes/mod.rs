//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves the Leptos SSR shell for every client route, the compiled
//! WASM/CSS bundle under `/pkg`, and a liveness probe. All data calls go from
//! the browser straight to the backend API; nothing here proxies them.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::error::HostError;

/// Routes that need neither Leptos options nor built assets.
fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: health probe, Leptos SSR routes and `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &HostConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.to_string_lossy().as_ref().into();
    }
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join("pkg");
    tracing::info!(pkg_dir = %pkg_dir.display(), "serving static assets");

    let router = health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http());

    Ok(if config.compression { router.layer(CompressionLayer::new()) } else { router })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
