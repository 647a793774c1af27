//! Infrastructure layer for storage.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-memory registry and its housekeeping task

pub mod memory;
