//! Repository trait for the bidirectional URL store.

use std::collections::HashMap;

/// Store interface for code ↔ URL mappings and per-domain counters.
///
/// All operations are synchronous and infallible: implementations hold their
/// state in memory and never perform I/O. Each individual call is atomic, so
/// a reader never observes a half-written mapping.
///
/// The store does not enforce uniqueness. Keeping the mapping a bijection is
/// the caller's job (see [`crate::application::services::ShortenerService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - `RwLock`-guarded maps
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlRepository: Send + Sync {
    /// Returns the URL stored under `code`, if any.
    fn find_by_code(&self, code: &str) -> Option<String>;

    /// Returns the code a canonical URL is stored under, if any.
    fn find_by_url(&self, long_url: &str) -> Option<String>;

    /// Associates `code` and `long_url` in both directions.
    ///
    /// Last write wins: an existing entry under the same code is replaced.
    fn insert(&self, code: &str, long_url: &str);

    /// Adds one to the counter for `domain`, starting from zero.
    fn increment_domain(&self, domain: &str);

    /// Returns an independent copy of all domain counters.
    fn domain_counts(&self) -> HashMap<String, u64>;

    /// Number of stored code → URL mappings.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
