//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures handed out by the store and the
//! service. They are always copies: no entity borrows from the store.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - Result of a shorten operation
//! - [`DomainCount`] - Number of links created for one source domain

pub mod domain_count;
pub mod short_link;

pub use domain_count::DomainCount;
pub use short_link::ShortLink;
