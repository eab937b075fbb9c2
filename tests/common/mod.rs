#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{Duration, Utc};
use linkforge::application::services::{LinkStore, StoreSettings};
use linkforge::domain::entities::ShortLink;
use linkforge::infrastructure::persistence::MemoryLinkRepository;
use linkforge::routes::build_router;
use linkforge::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://lf.test/";

pub fn test_link(id: u64, code: &str, url: &str) -> ShortLink {
    ShortLink {
        id,
        original_url: url.to_string(),
        short_code: code.to_string(),
        short_url: format!("{BASE_URL}{code}"),
        created_at: Utc::now() - Duration::days(1),
        expires_at: None,
    }
}

pub fn expired_link(id: u64, code: &str, url: &str) -> ShortLink {
    ShortLink {
        expires_at: Some(Utc::now() - Duration::hours(1)),
        ..test_link(id, code, url)
    }
}

pub async fn create_test_state(links: Vec<ShortLink>) -> AppState {
    let repository = Arc::new(MemoryLinkRepository::with_links(links));
    let store = LinkStore::open(repository, StoreSettings::new(BASE_URL))
        .await
        .unwrap();

    AppState::new(Arc::new(store))
}

pub async fn create_test_server(links: Vec<ShortLink>) -> (TestServer, AppState) {
    let state = create_test_state(links).await;
    let server = TestServer::new(build_router(state.clone())).unwrap();

    (server, state)
}
