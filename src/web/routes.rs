//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{create_link_handler, home_handler, stats_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET  /`      - Link creation form
/// - `POST /`      - Form submission
/// - `GET  /stats` - Every stored link with its status
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler).post(create_link_handler))
        .route("/stats", get(stats_handler))
}
