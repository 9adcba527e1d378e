//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::InMemoryUrlRepository;

/// Shortener service backed by the in-memory store.
pub type Shortener = ShortenerService<InMemoryUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<Shortener>,
    /// Number of entries reported by the metrics endpoint.
    pub metrics_top_n: usize,
}

impl AppState {
    pub fn new(shortener: Arc<Shortener>, metrics_top_n: usize) -> Self {
        Self {
            shortener,
            metrics_top_n,
        }
    }

    /// Builds state around a fresh, empty store.
    pub fn in_memory(base_url: impl Into<String>, metrics_top_n: usize) -> Self {
        let repository = Arc::new(InMemoryUrlRepository::new());
        let shortener = Arc::new(ShortenerService::new(repository, base_url));
        Self::new(shortener, metrics_top_n)
    }
}
