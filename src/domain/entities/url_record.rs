//! URL record entity stored in the registry under its short code.

use chrono::{DateTime, Utc};

/// A shortened URL and its mutable analytics state.
///
/// Owned by the registry under its short code key. `click_count` is
/// incremented in place on every successful redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
    pub is_custom_code: bool,
    pub click_count: u64,
}

impl UrlRecord {
    /// Creates a fresh record with no recorded clicks.
    pub fn new(original_url: String, expires_at: DateTime<Utc>, is_custom_code: bool) -> Self {
        Self {
            original_url,
            expires_at,
            is_custom_code,
            click_count: 0,
        }
    }

    /// Returns true if `now` is strictly past the expiry timestamp.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// A record paired with the short code it is registered under.
///
/// Returned by create and report operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub record: UrlRecord,
}

impl ShortLink {
    pub fn new(code: String, record: UrlRecord) -> Self {
        Self { code, record }
    }
}
