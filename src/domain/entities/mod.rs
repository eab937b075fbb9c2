//! Core domain entities.
//!
//! - [`ShortLink`] - A shortened URL mapping with optional expiry
//! - [`LinkCollection`] - Stored links plus the id counter

pub mod collection;
pub mod link;

pub use collection::LinkCollection;
pub use link::ShortLink;
