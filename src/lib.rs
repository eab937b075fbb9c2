//! # LinkForge
//!
//! A small URL shortener: a server-rendered form turns a long URL, an optional
//! validity period and an optional custom shortcode into a short link.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `ShortLink` entity, creation errors, repository trait
//! - **Application Layer** ([`application`]) - The link store: uniqueness, generation, expiry
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file and in-memory repositories
//! - **API Layer** ([`api`]) - JSON endpoints, redirect and health
//! - **Web Layer** ([`web`]) - HTML pages: link form and statistics
//!
//! ## Features
//!
//! - Generated or custom alphanumeric shortcodes
//! - Optional expiry in days; expired links stop resolving
//! - Links survive restarts in a JSON file
//! - Copy-to-clipboard on the result page
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://lf.example/"
//! export STORE_PATH="/var/lib/linkforge/links.json"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkStore, StoreSettings};
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::errors::LinkError;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{JsonFileLinkRepository, MemoryLinkRepository};
    pub use crate::state::AppState;
}
