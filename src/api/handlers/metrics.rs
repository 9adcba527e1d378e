//! Handler for domain metrics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::metrics::MetricsResponse;
use crate::state::AppState;

/// Returns the domains with the most shortened links.
///
/// # Endpoint
///
/// `GET /api/metrics`
///
/// # Response
///
/// ```json
/// {
///   "top_domains": [
///     { "domain": "udemy.com", "count": 8 },
///     { "domain": "youtube.com", "count": 6 },
///     { "domain": "stackoverflow.com", "count": 4 }
///   ]
/// }
/// ```
///
/// The list holds at most `METRICS_TOP_N` entries. Domains with equal counts
/// are ordered by name.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    let top_domains = state
        .shortener
        .top_domains(state.metrics_top_n)
        .into_iter()
        .map(Into::into)
        .collect();

    Json(MetricsResponse { top_domains })
}
