//! Repository trait for the short code registry.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outcome of a resolve attempt against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No entry under the code.
    Missing,
    /// Entry was past its expiry and has been removed.
    Expired(UrlRecord),
    /// Entry is live; carries the record after its click count was incremented.
    Live(UrlRecord),
}

/// Repository interface for the short code → URL record mapping.
///
/// Every method is a single critical section: implementations must make
/// check-then-insert and check-then-mutate sequences atomic per call.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryUrlRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts `record` under `code` unless the code is already present.
    ///
    /// Expired entries that have not been evicted still count as present.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the record was inserted
    /// - `Ok(false)` if the code was already taken
    async fn insert_if_absent(&self, code: &str, record: UrlRecord) -> Result<bool, AppError>;

    /// Resolves `code` at time `now`.
    ///
    /// Evicts the entry if it has expired, otherwise increments its click count.
    async fn resolve(&self, code: &str, now: DateTime<Utc>) -> Result<Resolution, AppError>;

    /// Returns a snapshot of the record under `code` without touching it.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Removes every entry expired at `now`. Returns how many were removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError>;

    /// Number of entries currently held, expired or not.
    async fn count(&self) -> Result<usize, AppError>;
}
