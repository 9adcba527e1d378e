//! Short link entity returned by the shortening service.

/// The outcome of shortening a URL.
///
/// `long_url` is the canonical form the code resolves to, which may differ
/// from what the caller submitted (scheme defaulting, host lowercasing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    /// `false` when the canonical URL was already mapped and the existing
    /// code was returned.
    pub created: bool,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(code: String, short_url: String, long_url: String, created: bool) -> Self {
        Self {
            code,
            short_url,
            long_url,
            created,
        }
    }
}
