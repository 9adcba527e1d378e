//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::warn;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/yYTQaq--",
///   "original_url": "example.com/some/page"
/// }
/// ```
///
/// `original_url` echoes the submitted value; the short URL resolves to its
/// normalized form.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, the `url` field is
/// missing or empty, or the URL cannot be normalized.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let original_url = payload.url.unwrap_or_default();

    let link = state
        .shortener
        .shorten(original_url.as_str())
        .inspect_err(|e| warn!(url = %original_url, "Rejected URL: {}", e))?;

    Ok(Json(ShortenResponse {
        short_url: link.short_url,
        original_url,
    }))
}
