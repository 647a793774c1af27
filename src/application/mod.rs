//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a transport-agnostic API for
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and redirect resolution
//! - [`services::stats_service::StatsService`] - Per-link analytics

pub mod services;
