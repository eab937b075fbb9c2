//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkStore;

/// Application state shared by all request handlers.
///
/// The link store is created once at startup by [`crate::server::run`] and
/// closed on shutdown; handlers only borrow it.
#[derive(Clone)]
pub struct AppState {
    pub link_store: Arc<LinkStore>,
}

impl AppState {
    pub fn new(link_store: Arc<LinkStore>) -> Self {
        Self { link_store }
    }
}
