//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the `/api/*` relay and Leptos SSR rendering under a
//! single Axum router. The browser only ever talks to this origin; REST calls
//! are forwarded to the configured upstream API unchanged.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::StartupError;
use crate::state::AppState;

/// Largest request body relayed upstream (avatar uploads included).
pub const MAX_FORWARD_BODY_BYTES: usize = 10 * 1024 * 1024;

/// API relay and health check.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(MAX_FORWARD_BODY_BYTES))
        .with_state(state)
}

/// Full host: API relay + Leptos SSR + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(state: AppState) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(smartspend_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || smartspend_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
