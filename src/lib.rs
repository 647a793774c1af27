//! # URL Shortener
//!
//! A small URL shortening service built with Axum, keeping every link in memory.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record entity and registry trait
//! - **Application Layer** ([`application`]) - Link creation, redirects and analytics
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and expiry sweeper
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random base62 or custom short codes
//! - Per-link expiry with lazy eviction on redirect
//! - Click counting and per-link analytics
//!
//! ## Quick Start
//!
//! ```bash
//! export CLIENT_ID="my-client"
//! export CLIENT_SECRET="my-secret"
//!
//! cargo run
//!
//! curl -X POST localhost:3000/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"longUrl": "https://example.com", "validityMinutes": 5}'
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
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{ShortLink, UrlRecord};
    pub use crate::domain::repositories::{Resolution, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryUrlRepository;
    pub use crate::state::AppState;
}
