//! Periodic eviction of expired registry entries.
//!
//! Resolve already evicts expired entries lazily; this task only reclaims memory
//! held by codes nobody requests again. It is disabled unless
//! `SWEEP_INTERVAL_SECONDS` is set.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use crate::domain::repositories::UrlRepository;

/// Runs the sweeper loop until the runtime shuts down.
pub async fn run_expiry_sweeper<R>(repository: Arc<R>, period: Duration)
where
    R: UrlRepository + ?Sized,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // First tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        sweep_once(repository.as_ref()).await;
    }
}

/// Performs a single sweep and returns the number of evicted entries.
pub(crate) async fn sweep_once<R>(repository: &R) -> usize
where
    R: UrlRepository + ?Sized,
{
    match repository.purge_expired(Utc::now()).await {
        Ok(0) => {
            debug!("Expiry sweep found nothing to evict");
            0
        }
        Ok(removed) => {
            info!(removed, "Evicted expired short links");
            removed
        }
        Err(e) => {
            error!("Expiry sweep failed: {}", e);
            0
        }
    }
}
