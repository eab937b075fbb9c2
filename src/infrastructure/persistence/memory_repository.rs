//! In-memory implementation of the link repository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::{LinkCollection, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Keeps the last saved collection in process memory.
///
/// Nothing survives a restart.
#[derive(Default)]
pub struct MemoryLinkRepository {
    collection: Mutex<LinkCollection>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `links`.
    pub fn with_links(links: Vec<ShortLink>) -> Self {
        Self {
            collection: Mutex::new(LinkCollection::new(links)),
        }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn load_all(&self) -> Result<LinkCollection, AppError> {
        self.collection
            .lock()
            .map(|collection| collection.clone())
            .map_err(|_| AppError::internal("Memory store poisoned", json!({})))
    }

    async fn save_all(&self, collection: &LinkCollection) -> Result<(), AppError> {
        let mut stored = self
            .collection
            .lock()
            .map_err(|_| AppError::internal("Memory store poisoned", json!({})))?;
        *stored = collection.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
