//! Click analytics service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for reading per-link analytics.
///
/// Reports are read-only snapshots. Unlike redirects, a report never checks
/// or acts on expiry: an expired code that has not been evicted yet still
/// reports its last known state.
pub struct StatsService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the current analytics snapshot for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record is registered under the code.
    pub async fn get_link_stats(&self, code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .map(|record| ShortLink::new(code.to_string(), record))
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Number of registered short links, including expired ones awaiting eviction.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
