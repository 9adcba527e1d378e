//! API route configuration.

use crate::api::handlers::{health_handler, metrics_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create (or fetch) the short URL for a long URL
/// - `GET  /metrics` - Top domains by number of shortened links
/// - `GET  /health`  - Health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
}
