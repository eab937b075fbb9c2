//! Top-level router configuration combining page, API and redirect routes.
//!
//! # Route Structure
//!
//! - `GET/POST /`        - Link creation form
//! - `GET  /stats`       - Statistics page
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check
//! - `/api/*`            - JSON API
//! - `/static/*`         - Stylesheet and copy-to-clipboard script
//!
//! Static routes win over `/{code}`, which is why those names are reserved
//! as custom shortcodes.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with every route and the tracing layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .nest("/api", api::routes::routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] with trailing
/// slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
