//! Handlers for link endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::normalize_url;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/a/very/long/path",
///   "validity_days": 30,          // optional
///   "custom_shortcode": "promo"   // optional
/// }
/// ```
///
/// # Errors
///
/// - 400 `validation_error` for malformed fields (per-field details)
/// - 409 `conflict` if the custom shortcode is taken
/// - 503 `generation_exhausted` if no free shortcode was found
/// - 500 `internal_error` if the link could not be persisted
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let original_url = normalize_url(&payload.original_url).map_err(|e| {
        AppError::bad_request(
            "Please enter a valid URL.",
            json!({ "field": "original_url", "reason": e.to_string() }),
        )
    })?;

    let link = state
        .link_store
        .add_link(original_url, payload.validity_days, payload.custom_shortcode)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists every stored link, expired ones included, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(State(state): State<AppState>) -> Json<LinkListResponse> {
    let items: Vec<LinkResponse> = state
        .link_store
        .list_links()
        .await
        .into_iter()
        .map(LinkResponse::from)
        .collect();

    Json(LinkListResponse {
        total: items.len(),
        items,
    })
}

/// Returns one active link.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or its link has expired.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_store
        .get_link(&code)
        .await
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

    Ok(Json(link.into()))
}
