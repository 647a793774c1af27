//! In-memory repository implementations.
//!
//! The registry lives for the lifetime of the process; nothing is persisted.
//!
//! # Repositories
//!
//! - [`InMemoryUrlRepository`] - Short code registry
//! - [`sweeper`] - Optional background eviction of expired entries

pub mod memory_url_repository;
pub mod sweeper;

pub use memory_url_repository::InMemoryUrlRepository;
pub use sweeper::run_expiry_sweeper;
