//! In-memory implementation of [`UrlRepository`].

use crate::domain::repositories::UrlRepository;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::trace;

/// Both lookup directions and the domain counters, guarded together.
#[derive(Debug, Default)]
struct Tables {
    url_by_code: HashMap<String, String>,
    code_by_url: HashMap<String, String>,
    domain_counts: HashMap<String, u64>,
}

/// Process-local URL store.
///
/// One reader/writer lock guards every table: lookups run concurrently,
/// writes are exclusive, and each call sees a consistent view of both
/// directions. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    tables: RwLock<Tables>,
}

impl InMemoryUrlRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UrlRepository for InMemoryUrlRepository {
    fn find_by_code(&self, code: &str) -> Option<String> {
        self.tables.read().url_by_code.get(code).cloned()
    }

    fn find_by_url(&self, long_url: &str) -> Option<String> {
        self.tables.read().code_by_url.get(long_url).cloned()
    }

    fn insert(&self, code: &str, long_url: &str) {
        let mut tables = self.tables.write();
        tables
            .url_by_code
            .insert(code.to_string(), long_url.to_string());
        tables
            .code_by_url
            .insert(long_url.to_string(), code.to_string());
        trace!(code, long_url, "Stored mapping");
    }

    fn increment_domain(&self, domain: &str) {
        let mut tables = self.tables.write();
        *tables.domain_counts.entry(domain.to_string()).or_insert(0) += 1;
    }

    fn domain_counts(&self) -> HashMap<String, u64> {
        self.tables.read().domain_counts.clone()
    }

    fn len(&self) -> usize {
        self.tables.read().url_by_code.len()
    }
}
