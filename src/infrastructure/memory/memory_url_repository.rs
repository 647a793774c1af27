//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::Mutex;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{Resolution, UrlRepository};
use crate::error::AppError;

/// Process-local registry of short codes.
///
/// A single async mutex guards the whole map. Each trait method acquires it
/// exactly once, so every operation is atomic with respect to the others.
/// Nothing is awaited while the lock is held.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, UrlRecord>>,
}

impl InMemoryUrlRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert_if_absent(&self, code: &str, record: UrlRecord) -> Result<bool, AppError> {
        let mut records = self.records.lock().await;

        match records.entry(code.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(true)
            }
        }
    }

    async fn resolve(&self, code: &str, now: DateTime<Utc>) -> Result<Resolution, AppError> {
        let mut records = self.records.lock().await;

        let Some(record) = records.get_mut(code) else {
            return Ok(Resolution::Missing);
        };

        if record.is_expired_at(now) {
            let evicted = records.remove(code);
            return Ok(evicted.map_or(Resolution::Missing, Resolution::Expired));
        }

        record.click_count += 1;
        Ok(Resolution::Live(record.clone()))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.lock().await;
        Ok(records.get(code).cloned())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let mut records = self.records.lock().await;
        let before = records.len();

        records.retain(|_, record| !record.is_expired_at(now));

        Ok(before - records.len())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.records.lock().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;

    fn live_record(url: &str) -> UrlRecord {
        UrlRecord::new(url.to_string(), Utc::now() + Duration::minutes(30), false)
    }

    fn expired_record(url: &str) -> UrlRecord {
        UrlRecord::new(url.to_string(), Utc::now() - Duration::minutes(1), true)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUrlRepository::new();

        let inserted = repo
            .insert_if_absent("abcd", live_record("https://example.com"))
            .await
            .unwrap();
        assert!(inserted);

        let found = repo.find_by_code("abcd").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com");
        assert_eq!(found.click_count, 0);
    }

    #[tokio::test]
    async fn test_insert_rejects_taken_code() {
        let repo = InMemoryUrlRepository::new();

        assert!(
            repo.insert_if_absent("taken", live_record("https://one.com"))
                .await
                .unwrap()
        );
        assert!(
            !repo
                .insert_if_absent("taken", live_record("https://two.com"))
                .await
                .unwrap()
        );

        let found = repo.find_by_code("taken").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://one.com");
    }

    #[tokio::test]
    async fn test_insert_rejects_expired_but_present_code() {
        let repo = InMemoryUrlRepository::new();
        repo.insert_if_absent("stale", expired_record("https://old.com"))
            .await
            .unwrap();

        let inserted = repo
            .insert_if_absent("stale", live_record("https://new.com"))
            .await
            .unwrap();

        assert!(!inserted);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_codes_are_case_sensitive() {
        let repo = InMemoryUrlRepository::new();

        assert!(
            repo.insert_if_absent("Code", live_record("https://upper.com"))
                .await
                .unwrap()
        );
        assert!(
            repo.insert_if_absent("code", live_record("https://lower.com"))
                .await
                .unwrap()
        );
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let repo = InMemoryUrlRepository::new();

        let resolution = repo.resolve("nope", Utc::now()).await.unwrap();
        assert_eq!(resolution, Resolution::Missing);
    }

    #[tokio::test]
    async fn test_resolve_increments_clicks() {
        let repo = InMemoryUrlRepository::new();
        repo.insert_if_absent("live", live_record("https://example.com"))
            .await
            .unwrap();

        for expected in 1..=3 {
            match repo.resolve("live", Utc::now()).await.unwrap() {
                Resolution::Live(record) => assert_eq!(record.click_count, expected),
                other => panic!("unexpected resolution: {other:?}"),
            }
        }

        let found = repo.find_by_code("live").await.unwrap().unwrap();
        assert_eq!(found.click_count, 3);
    }

    #[tokio::test]
    async fn test_resolve_evicts_expired() {
        let repo = InMemoryUrlRepository::new();
        repo.insert_if_absent("old", expired_record("https://example.com"))
            .await
            .unwrap();

        let resolution = repo.resolve("old", Utc::now()).await.unwrap();
        assert!(matches!(resolution, Resolution::Expired(_)));

        assert!(repo.find_by_code("old").await.unwrap().is_none());
        assert_eq!(
            repo.resolve("old", Utc::now()).await.unwrap(),
            Resolution::Missing
        );
    }

    #[tokio::test]
    async fn test_find_does_not_mutate() {
        let repo = InMemoryUrlRepository::new();
        let record = expired_record("https://example.com");
        repo.insert_if_absent("snap", record.clone()).await.unwrap();

        let first = repo.find_by_code("snap").await.unwrap().unwrap();
        let second = repo.find_by_code("snap").await.unwrap().unwrap();

        assert_eq!(first, record);
        assert_eq!(second, record);
    }

    #[tokio::test]
    async fn test_purge_expired_keeps_live_entries() {
        let repo = InMemoryUrlRepository::new();
        repo.insert_if_absent("live", live_record("https://a.com"))
            .await
            .unwrap();
        repo.insert_if_absent("dead1", expired_record("https://b.com"))
            .await
            .unwrap();
        repo.insert_if_absent("dead2", expired_record("https://c.com"))
            .await
            .unwrap();

        let removed = repo.purge_expired(Utc::now()).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.find_by_code("live").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_concurrent_claims_single_winner() {
        let repo = Arc::new(InMemoryUrlRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert_if_absent("race", live_record(&format!("https://{i}.com")))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_resolves_count_every_click() {
        let repo = Arc::new(InMemoryUrlRepository::new());
        repo.insert_if_absent("hot", live_record("https://example.com"))
            .await
            .unwrap();

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.resolve("hot", Utc::now()).await.unwrap() })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let found = repo.find_by_code("hot").await.unwrap().unwrap();
        assert_eq!(found.click_count, 50);
    }
}
