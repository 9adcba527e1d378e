//! Infrastructure layer implementing interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory store implementation

pub mod persistence;
