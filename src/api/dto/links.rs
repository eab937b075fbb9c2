//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;
use crate::utils::code_generator::SHORTCODE_REGEX;

/// Request to create one short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Please enter a valid URL."))]
    pub original_url: String,

    /// Days until the link expires; omitted means never.
    #[validate(range(min = 1, message = "Must be a positive number."))]
    pub validity_days: Option<u32>,

    /// Optional custom short code; empty means generate one.
    #[validate(regex(
        path = *SHORTCODE_REGEX,
        message = "Shortcode can only contain letters and numbers."
    ))]
    pub custom_shortcode: Option<String>,
}

/// A stored link as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: u64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
}

impl LinkResponse {
    pub fn at(link: ShortLink, now: DateTime<Utc>) -> Self {
        Self {
            expired: link.is_expired_at(now),
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            short_url: link.short_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

impl From<ShortLink> for LinkResponse {
    fn from(link: ShortLink) -> Self {
        Self::at(link, Utc::now())
    }
}

/// Every stored link, newest first.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub items: Vec<LinkResponse>,
}
