//! Deterministic short code generation.
//!
//! Codes are derived from the canonical URL alone, so shortening the same URL
//! on any instance yields the same code.

use base64::Engine as _;
use md5::{Digest, Md5};

/// Number of encoded characters kept from the digest.
pub const CODE_LENGTH: usize = 8;

/// Generates the short code for a canonical URL.
///
/// Hashes the UTF-8 bytes with MD5, encodes the 16-byte digest as URL-safe
/// base64 without padding (22 characters) and keeps the first
/// [`CODE_LENGTH`] characters.
///
/// Truncation makes collisions possible; the service resolves them by
/// suffixing (see [`crate::application::services::ShortenerService::shorten`]).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(generate_code("https://example.com/"), "GCzO2zOp");
/// ```
pub fn generate_code(canonical_url: &str) -> String {
    let digest = Md5::digest(canonical_url.as_bytes());

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);
    code.truncate(CODE_LENGTH);
    code
}
