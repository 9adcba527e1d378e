//! Repository trait definitions for the domain layer.
//!
//! The shortener needs a single store: [`UrlRepository`], holding the
//! code ↔ URL tables and the per-domain counters. Implementations live in
//! `crate::infrastructure::persistence`; a `mockall` mock is generated for
//! unit tests.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
