#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use std::sync::Arc;
use url_shortener::application::services::ShortenerService;
use url_shortener::infrastructure::persistence::InMemoryUrlRepository;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state() -> AppState {
    AppState::in_memory(BASE_URL, 3)
}

/// State whose store is also handed back, for seeding and inspection.
pub fn create_test_state_with_repo() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let shortener = Arc::new(ShortenerService::new(repo.clone(), BASE_URL));
    (AppState::new(shortener, 3), repo)
}

/// Serves the same stack as the binary, trailing-slash normalization included.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}

/// Returns the code part of a short URL.
pub fn code_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}
