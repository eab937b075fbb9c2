//! ShortLink entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL with its creation and expiry timestamps.
///
/// Records are created once by [`crate::application::services::LinkStore`] and
/// never mutated afterwards. Expired records stay in storage and are filtered
/// out at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub id: u64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Returns true if the link has passed its expiry time at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if the link still resolves at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link(expires_at: Option<DateTime<Utc>>) -> ShortLink {
        ShortLink {
            id: 1,
            original_url: "https://example.com/".to_string(),
            short_code: "abc123".to_string(),
            short_url: "http://localhost:3000/abc123".to_string(),
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_link_without_expiry_never_expires() {
        let link = link(None);
        assert!(!link.is_expired());
        assert!(link.is_active_at(Utc::now() + Duration::days(100_000)));
    }

    #[test]
    fn test_link_is_expired() {
        let link = link(Some(Utc::now() - Duration::seconds(1)));
        assert!(link.is_expired());
    }

    #[test]
    fn test_link_expires_exactly_at_deadline() {
        let deadline = Utc::now() + Duration::days(1);
        let link = link(Some(deadline));

        assert!(link.is_active_at(deadline - Duration::milliseconds(1)));
        assert!(link.is_expired_at(deadline));
    }

    #[test]
    fn test_serialization_omits_missing_expiry() {
        let json = serde_json::to_value(link(None)).unwrap();
        assert!(json.get("expires_at").is_none());
        assert_eq!(json["short_code"], "abc123");

        let back: ShortLink = serde_json::from_value(json).unwrap();
        assert!(back.expires_at.is_none());
    }
}
