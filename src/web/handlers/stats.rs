//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};

use crate::domain::entities::ShortLink;
use crate::state::AppState;
use crate::web::nav::{NavItem, nav_items};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// One table row of the statistics page.
pub struct LinkRow {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: String,
    pub expires_at: String,
    pub active: bool,
}

impl LinkRow {
    fn new(link: ShortLink, now: DateTime<Utc>) -> Self {
        Self {
            active: link.is_active_at(now),
            created_at: link.created_at.format(TIME_FORMAT).to_string(),
            expires_at: link
                .expires_at
                .map(|e| e.format(TIME_FORMAT).to_string())
                .unwrap_or_else(|| "Never".to_string()),
            short_code: link.short_code,
            short_url: link.short_url,
            original_url: link.original_url,
        }
    }
}

/// Template for the statistics page.
///
/// Renders `templates/stats.html` with totals and one row per stored link.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub nav: Vec<NavItem>,
    pub rows: Vec<LinkRow>,
    pub total: usize,
    pub active: usize,
    pub expired: usize,
}

/// Renders every stored link, newest first.
///
/// # Endpoint
///
/// `GET /stats`
pub async fn stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();
    let rows: Vec<LinkRow> = state
        .link_store
        .list_links()
        .await
        .into_iter()
        .map(|link| LinkRow::new(link, now))
        .collect();

    let active = rows.iter().filter(|row| row.active).count();

    StatsTemplate {
        nav: nav_items("/stats"),
        total: rows.len(),
        expired: rows.len() - active,
        active,
        rows,
    }
}
