//! Domain layer containing the link entity, its errors and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Discriminated failures of link creation
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on HTTP, templates or the filesystem.
//! Business rules that need the whole collection (uniqueness, code generation)
//! live in [`crate::application::services::LinkStore`].

pub mod entities;
pub mod errors;
pub mod repositories;
