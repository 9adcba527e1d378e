//! Store implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`InMemoryUrlRepository`] - Process-local code ↔ URL tables and domain counters

pub mod memory_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
