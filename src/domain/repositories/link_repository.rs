//! Repository trait for durable short link storage.

use crate::domain::entities::LinkCollection;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable storage for the whole link collection and its id counter.
///
/// The store reads the full collection once at startup and writes the full
/// collection back after every mutation, so implementations only need bulk
/// operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileLinkRepository`] - JSON file on disk
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Loads every stored link and the id counter.
    ///
    /// A storage location that does not exist yet yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage cannot be read or parsed.
    async fn load_all(&self) -> Result<LinkCollection, AppError>;

    /// Replaces the stored collection with `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage cannot be written.
    async fn save_all(&self, collection: &LinkCollection) -> Result<(), AppError>;

    /// Human-readable description of where links are kept.
    fn describe(&self) -> String;
}
