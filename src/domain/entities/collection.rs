//! The persisted set of short links together with its id counter.

use serde::{Deserialize, Serialize};

use super::link::ShortLink;

/// Every stored [`ShortLink`] plus the next id to hand out.
///
/// `next_id` only ever grows. Removing links (purge, expired-code reuse)
/// leaves it untouched, so an id is never given to two different links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCollection {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub links: Vec<ShortLink>,
}

impl LinkCollection {
    /// Wraps `links`, starting the counter after the highest stored id.
    pub fn new(links: Vec<ShortLink>) -> Self {
        let mut collection = Self { next_id: 0, links };
        collection.normalize();
        collection
    }

    /// Raises `next_id` above every stored id.
    ///
    /// Files written by hand or by older versions may carry a missing or
    /// stale counter.
    pub fn normalize(&mut self) {
        let floor = self.links.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        self.next_id = self.next_id.max(floor);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn link(id: u64) -> ShortLink {
        ShortLink {
            id,
            original_url: "https://example.com/".to_string(),
            short_code: format!("code{id}"),
            short_url: format!("http://localhost:3000/code{id}"),
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    #[test]
    fn test_new_starts_after_highest_id() {
        assert_eq!(LinkCollection::new(vec![]).next_id, 1);
        assert_eq!(LinkCollection::new(vec![link(4), link(2)]).next_id, 5);
    }

    #[test]
    fn test_normalize_never_lowers_counter() {
        let mut collection = LinkCollection {
            next_id: 10,
            links: vec![link(3)],
        };
        collection.normalize();
        assert_eq!(collection.next_id, 10);

        collection.next_id = 2;
        collection.normalize();
        assert_eq!(collection.next_id, 4);
    }

    #[test]
    fn test_missing_counter_deserializes_as_zero() {
        let collection: LinkCollection = serde_json::from_str(r#"{ "links": [] }"#).unwrap();
        assert_eq!(collection.next_id, 0);
        assert!(collection.is_empty());
    }
}
