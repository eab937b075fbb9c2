//! Link repository implementations.
//!
//! - [`JsonFileLinkRepository`] - Durable storage in a pretty-printed JSON file with an id counter
//! - [`MemoryLinkRepository`] - Volatile storage, used for tests and `STORE_PATH=:memory:`

pub mod json_file_repository;
pub mod memory_repository;

pub use json_file_repository::JsonFileLinkRepository;
pub use memory_repository::MemoryLinkRepository;
