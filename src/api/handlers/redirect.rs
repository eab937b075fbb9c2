//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or its link has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_store.get_link(&code).await.ok_or_else(|| {
        debug!(%code, "Short link not found or expired");
        AppError::not_found("Short link not found", json!({ "code": code }))
    })?;

    debug!(%code, target = %link.original_url, "Redirecting");
    Ok(Redirect::temporary(&link.original_url))
}
