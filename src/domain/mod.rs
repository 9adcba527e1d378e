//! Domain layer containing business entities, errors and the store contract.
//!
//! This module defines the core concepts of the shortener independent of
//! the HTTP layer and of any concrete storage.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Domain error kinds surfaced by the shortener
//! - [`repositories`] - Store trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::ShortenError;
