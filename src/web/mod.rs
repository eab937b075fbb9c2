//! Browser-facing pages.
//!
//! Server-side rendered with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`forms`] - Link creation form validation
//! - [`handlers`] - Template rendering handlers
//! - [`nav`] - Header navigation
//! - [`routes`] - Page route configuration

pub mod forms;
pub mod handlers;
pub mod nav;
pub mod routes;
