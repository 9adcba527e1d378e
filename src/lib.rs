//! # URL Shortener
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, errors and the store trait
//! - **Application Layer** ([`application`]) - Shortening, resolution and domain metrics
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Deterministic 8-character codes derived from the normalized URL
//! - Idempotent shortening: a URL always maps to the same code
//! - Collision handling by numeric suffixes
//! - Per-domain counters with a top-N query
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8080"   # Optional
//! cargo run
//!
//! curl -X POST localhost:8080/api/shorten -H 'content-type: application/json' \
//!      -d '{"url": "example.com/page"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::ShortenError;
    pub use crate::domain::entities::{DomainCount, ShortLink};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
}
