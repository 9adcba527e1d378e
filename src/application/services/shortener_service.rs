//! Link shortening, resolution and domain metrics service.

use std::sync::Arc;

use crate::domain::ShortenError;
use crate::domain::entities::{DomainCount, ShortLink};
use crate::domain::repositories::UrlRepository;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::{extract_domain, normalize_url};
use tracing::{debug, info};

/// Service for creating and resolving short links.
///
/// Owns no state besides the base URL; all mappings and counters live in the
/// shared repository, so several services can share one store and tests can
/// run isolated instances.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    ///
    /// `base_url` prefixes every generated code; a trailing `/` is dropped.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Shortens a URL, returning the existing link if it was shortened before.
    ///
    /// # Deduplication
    ///
    /// The lookup key is the canonical URL, so inputs that normalize
    /// identically (`example.com`, `https://example.com`) share one code.
    /// An idempotent hit touches neither the mappings nor the counters.
    ///
    /// # Code Generation
    ///
    /// The code is the truncated digest of the canonical URL. When another
    /// URL already owns that code, `1`, `2`, ... are appended to the original
    /// code until a free one is found. The domain counter is bumped once,
    /// after the mapping is stored.
    ///
    /// # Concurrency
    ///
    /// The probe and the insert are separate store calls. Two concurrent
    /// calls for different URLs whose codes collide can both claim the same
    /// free code, and the later insert overwrites the earlier mapping. Two
    /// concurrent calls for the same new URL can both miss the existing-link
    /// lookup; both store the same mapping, but the domain is counted twice.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::InvalidUrl`] if the input cannot be normalized;
    /// the store is left untouched.
    pub fn shorten<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<ShortLink, ShortenError> {
        let long_url = normalize_url(raw)?;

        if let Some(code) = self.repository.find_by_url(&long_url) {
            debug!(%code, %long_url, "Returning existing short link");
            let short_url = self.short_url(&code);
            return Ok(ShortLink::new(code, short_url, long_url, false));
        }

        let code = self.free_code(&long_url);
        let domain = extract_domain(&long_url);

        self.repository.insert(&code, &long_url);
        self.repository.increment_domain(&domain);

        info!(%code, %long_url, %domain, "Created short link");

        let short_url = self.short_url(&code);
        Ok(ShortLink::new(code, short_url, long_url, true))
    }

    /// Resolves a short code to its canonical URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if no link uses the code.
    pub fn resolve(&self, code: &str) -> Result<String, ShortenError> {
        self.repository
            .find_by_code(code)
            .ok_or_else(|| ShortenError::not_found("Short URL not found"))
    }

    /// Returns up to `n` domains with the most links, highest count first.
    ///
    /// Equal counts are ordered by domain name so the result is deterministic.
    pub fn top_domains(&self, n: usize) -> Vec<DomainCount> {
        let mut domains: Vec<DomainCount> = self
            .repository
            .domain_counts()
            .into_iter()
            .map(|(domain, count)| DomainCount::new(domain, count))
            .collect();

        domains.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
        domains.truncate(n);
        domains
    }

    /// Builds the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Number of links currently stored.
    pub fn link_count(&self) -> usize {
        self.repository.len()
    }

    /// Finds a code for `long_url` that no other URL occupies.
    ///
    /// Terminates because every suffixed candidate is distinct and the
    /// store is finite.
    fn free_code(&self, long_url: &str) -> String {
        let base = generate_code(long_url);
        let mut code = base.clone();
        let mut suffix: u64 = 0;

        while let Some(existing) = self.repository.find_by_code(&code) {
            if existing == long_url {
                break;
            }
            suffix += 1;
            debug!(%code, %existing, attempt = suffix, "Short code collision");
            code = format!("{base}{suffix}");
        }

        code
    }
}
