//! DTOs for per-link analytics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Analytics snapshot for a single short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
    pub expires_at: DateTime<Utc>,
    pub custom_short_code_used: bool,
}

impl From<ShortLink> for AnalyticsResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_code: link.code,
            original_url: link.record.original_url,
            clicks: link.record.click_count,
            expires_at: link.record.expires_at,
            custom_short_code_used: link.record.is_custom_code,
        }
    }
}
