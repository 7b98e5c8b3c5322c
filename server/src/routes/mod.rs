//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the HTTP endpoints and stitches them with Leptos SSR
//! rendering under a single Axum router. API and entry routes are plain
//! handlers; the chat page itself is a Leptos route.

pub mod entry;
pub mod upload;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API and entry routes. Usable without any Leptos configuration.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(entry::root))
        .route("/login", get(entry::login))
        .route(
            "/api/upload",
            post(upload::upload_proxy)
                .fallback(upload::method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application router with request tracing.
///
/// Falls back to the API routes alone when the Leptos configuration is
/// unavailable, so the upload proxy keeps working.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable, serving API routes only");
            api_routes(state)
        }
    };
    router.layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend: API routes + chat page + static assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*` env).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(not_found))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found.")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
