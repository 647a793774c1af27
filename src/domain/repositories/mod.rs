//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for registry operations; implementations live in
//! `crate::infrastructure::memory`. Mock implementations are auto-generated via
//! `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Short code registry with atomic claim and resolve

pub mod url_repository;

pub use url_repository::{Resolution, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
