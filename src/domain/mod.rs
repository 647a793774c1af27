//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Business rules live in services (see [`crate::application::services`]).
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Registry trait definitions

pub mod entities;
pub mod repositories;
