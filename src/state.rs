//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::memory::InMemoryUrlRepository;

/// State shared across handlers.
///
/// Both services hold the same registry instance, created once in
/// [`crate::server::run`] and dropped when the server stops.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryUrlRepository>>,
    pub stats_service: Arc<StatsService<InMemoryUrlRepository>>,
    /// When true, `X-Forwarded-Proto` decides the scheme of generated short URLs.
    pub behind_proxy: bool,
}

impl AppState {
    /// Builds state around an existing registry.
    pub fn new(
        repository: Arc<InMemoryUrlRepository>,
        default_validity_minutes: i64,
        behind_proxy: bool,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::with_default_validity(
                repository.clone(),
                default_validity_minutes,
            )),
            stats_service: Arc::new(StatsService::new(repository)),
            behind_proxy,
        }
    }
}
