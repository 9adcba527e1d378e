//! URL normalization, validation and domain extraction.
//!
//! Turns user input into the canonical absolute URL used as the store key,
//! and derives the domain a link is counted under.

use url::Url;

use crate::domain::ShortenError;

/// Scheme prepended to input that carries none.
const DEFAULT_SCHEME: &str = "https://";

/// Domain reported for URLs that cannot be parsed.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Normalizes raw input to a canonical absolute URL.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Surrounding whitespace is trimmed
/// 2. **Scheme**: `https://` is prepended when the input has no `scheme://` prefix
/// 3. **Protocol**: Only HTTP and HTTPS are allowed (case-insensitive)
/// 4. **Host**: Required; lowercased by the parser
/// 5. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 6. **Fragments**: Removed (e.g., `#section`)
/// 7. **Path and query**: Preserved as parsed
///
/// Accepts `&str` or `Option<&str>`; `None` is treated like empty input.
///
/// # Errors
///
/// Returns [`ShortenError::InvalidUrl`] with one of:
/// - `URL cannot be empty`
/// - `Invalid URL format: <parser detail>`
/// - `URL must use http or https scheme`
/// - `URL must have a valid host`
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com/");
/// assert_eq!(
///     normalize_url("HTTP://EXAMPLE.COM:80/Path#top").unwrap(),
///     "http://example.com/Path"
/// );
/// ```
pub fn normalize_url<'a>(raw: impl Into<Option<&'a str>>) -> Result<String, ShortenError> {
    let raw: Option<&str> = raw.into();
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ShortenError::invalid_url("URL cannot be empty"));
    }

    let candidate = if has_explicit_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    };

    let mut url = Url::parse(&candidate)
        .map_err(|e| ShortenError::invalid_url(format!("Invalid URL format: {e}")))?;

    if !url.scheme().eq_ignore_ascii_case("http") && !url.scheme().eq_ignore_ascii_case("https") {
        return Err(ShortenError::invalid_url("URL must use http or https scheme"));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ShortenError::invalid_url("URL must have a valid host"));
    }

    url.set_fragment(None);

    Ok(url.to_string())
}

/// Extracts the domain (host without port) from a canonical URL.
///
/// Never fails: input that does not parse, or that has no host, yields
/// [`UNKNOWN_DOMAIN`].
pub fn extract_domain(canonical_url: &str) -> String {
    Url::parse(canonical_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| UNKNOWN_DOMAIN.to_string())
}

/// Returns true when input starts with a syntactically valid `scheme://`.
///
/// Input like `ftp://host` keeps its scheme so it can be rejected, while
/// `example.com:8080/path` is treated as scheme-less.
fn has_explicit_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
