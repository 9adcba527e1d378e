//! Utility functions for URL processing and code generation.
//!
//! - [`url_normalizer`] - URL normalization, validation and domain extraction
//! - [`code_generator`] - Deterministic short code generation

pub mod code_generator;
pub mod url_normalizer;
