//! Domain errors returned by the shortening service.

/// Errors produced by URL normalization and code resolution.
///
/// Both kinds are terminal for the current operation. The HTTP layer maps
/// them onto status codes in [`crate::error::AppError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    /// The input cannot be turned into an absolute http/https URL.
    #[error("{0}")]
    InvalidUrl(String),

    /// No mapping exists for the requested short code.
    #[error("{0}")]
    NotFound(String),
}

impl ShortenError {
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
