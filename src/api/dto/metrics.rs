//! DTOs for the domain metrics endpoint.

use serde::Serialize;

use crate::domain::entities::DomainCount;

/// Domains with the most shortened links, highest count first.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub top_domains: Vec<DomainMetric>,
}

#[derive(Debug, Serialize)]
pub struct DomainMetric {
    pub domain: String,
    pub count: u64,
}

impl From<DomainCount> for DomainMetric {
    fn from(value: DomainCount) -> Self {
        Self {
            domain: value.domain,
            count: value.count,
        }
    }
}
