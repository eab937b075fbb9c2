//! Link creation page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::domain::entities::ShortLink;
use crate::domain::errors::LinkError;
use crate::state::AppState;
use crate::web::forms::{FieldErrors, ShortenForm};
use crate::web::nav::{NavItem, nav_items};

/// Template for the landing page.
///
/// Renders `templates/home.html` with:
/// - The creation form, refilled with `values` after a failed submission
/// - Inline `errors` per field
/// - The `created` link with a copy button after a successful submission
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: Vec<NavItem>,
    pub values: ShortenForm,
    pub errors: FieldErrors,
    pub created: Option<ShortLink>,
}

impl HomeTemplate {
    fn new(values: ShortenForm, errors: FieldErrors, created: Option<ShortLink>) -> Self {
        Self {
            nav: nav_items("/"),
            values,
            errors,
            created,
        }
    }
}

/// Renders the empty link creation form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate::new(ShortenForm::default(), FieldErrors::default(), None)
}

/// Validates a form submission and creates the link.
///
/// # Endpoint
///
/// `POST /` (`application/x-www-form-urlencoded`)
///
/// # Responses
///
/// - **200**: link created; page shows it and a reset form
/// - **422**: field validation failed; the store was not called
/// - **409**: requested shortcode is already taken
/// - **503**: no free shortcode could be generated
/// - **500**: the link could not be persisted
pub async fn create_link_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Response {
    let values = form.clone();

    let input = match form.into_input() {
        Ok(input) => input,
        Err(errors) => {
            debug!(?errors, "Rejected link form");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                HomeTemplate::new(values, errors, None),
            )
                .into_response();
        }
    };

    match state
        .link_store
        .add_link(
            input.original_url,
            input.validity_days,
            input.custom_shortcode,
        )
        .await
    {
        Ok(link) => {
            HomeTemplate::new(ShortenForm::default(), FieldErrors::default(), Some(link))
                .into_response()
        }
        Err(err) => {
            if !matches!(err, LinkError::Storage(_)) {
                info!(reason = %err, "Link creation refused");
            }
            let (status, errors) = FieldErrors::from_link_error(&err);
            (status, HomeTemplate::new(values, errors, None)).into_response()
        }
    }
}
