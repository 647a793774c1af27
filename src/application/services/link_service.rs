//! Link creation and redirect resolution service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{ShortLink, UrlRecord};
use crate::domain::repositories::{Resolution, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_custom_code};
use crate::utils::url_validator::{UrlValidationError, validate_url};

/// Validity applied when a request does not supply a usable one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Service for creating short links and resolving them for redirects.
pub struct LinkService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    default_validity_minutes: i64,
}

impl<R: UrlRepository + ?Sized> LinkService<R> {
    /// Creates a new link service using the standard 30 minute validity.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_default_validity(repository, DEFAULT_VALIDITY_MINUTES)
    }

    /// Creates a new link service with a custom fallback validity.
    ///
    /// Non-positive values are replaced by [`DEFAULT_VALIDITY_MINUTES`].
    pub fn with_default_validity(repository: Arc<R>, default_validity_minutes: i64) -> Self {
        let default_validity_minutes = if default_validity_minutes > 0 {
            default_validity_minutes
        } else {
            DEFAULT_VALIDITY_MINUTES
        };

        Self {
            repository,
            default_validity_minutes,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `long_url` - The original URL, stored verbatim once it parses
    /// - `custom_code` - Optional user-chosen short code
    /// - `validity_minutes` - Optional lifetime; missing, non-positive or
    ///   out-of-range values fall back to the default
    ///
    /// # Code Generation
    ///
    /// Without a custom code, random codes are drawn until one can be claimed.
    /// There is no retry cap: with 62^8 possible codes a collision loop does not
    /// occur in practice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is empty or not an absolute URL
    /// - Custom code is not 4-15 alphanumeric characters
    ///
    /// Returns [`AppError::Conflict`] if the custom code is already registered,
    /// including expired entries not yet evicted.
    pub async fn create_short_link(
        &self,
        long_url: &str,
        custom_code: Option<String>,
        validity_minutes: Option<i64>,
    ) -> Result<ShortLink, AppError> {
        validate_url(long_url).map_err(|e| match e {
            UrlValidationError::Empty => AppError::bad_request("URL is required", json!({})),
            other => {
                AppError::bad_request("Invalid URL format", json!({ "reason": other.to_string() }))
            }
        })?;

        if let Some(custom) = &custom_code
            && !is_valid_custom_code(custom)
        {
            return Err(AppError::bad_request(
                "Custom short code must be 4-15 alphanumeric characters",
                json!({ "code": custom }),
            ));
        }

        let now = Utc::now();
        let expires_at = validity_minutes
            .filter(|m| *m > 0)
            .and_then(|m| expiry_after(now, m))
            .or_else(|| expiry_after(now, self.default_validity_minutes))
            .ok_or_else(|| {
                AppError::internal(
                    "Default validity period is out of range",
                    json!({ "default_validity_minutes": self.default_validity_minutes }),
                )
            })?;

        let record = UrlRecord::new(long_url.to_string(), expires_at, custom_code.is_some());

        let code = match custom_code {
            Some(custom) => {
                if !self
                    .repository
                    .insert_if_absent(&custom, record.clone())
                    .await?
                {
                    return Err(AppError::conflict(
                        "Custom short code already in use",
                        json!({ "code": custom }),
                    ));
                }

                custom
            }
            None => self.claim_generated_code(&record).await?,
        };

        info!(
            code = %code,
            custom = record.is_custom_code,
            expires_at = %record.expires_at,
            "Short link created"
        );

        Ok(ShortLink::new(code, record))
    }

    /// Resolves a short code to its original URL and records the click.
    ///
    /// Expired entries are evicted on the spot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Gone`] if the code has expired.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.repository.resolve(code, Utc::now()).await? {
            Resolution::Live(record) => {
                debug!(code = %code, clicks = record.click_count, "Short link resolved");
                Ok(record.original_url)
            }
            Resolution::Expired(record) => {
                info!(code = %code, expired_at = %record.expires_at, "Evicted expired short link");
                Err(AppError::gone(
                    "Short link has expired",
                    json!({ "code": code }),
                ))
            }
            Resolution::Missing => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
        }
    }

    /// Constructs the full short URL from the request origin and code.
    pub fn get_short_url(&self, scheme: &str, host: &str, code: &str) -> String {
        format!("{}://{}/{}", scheme, host.trim_end_matches('/'), code)
    }

    /// Draws random codes until one is claimed for `record`.
    async fn claim_generated_code(&self, record: &UrlRecord) -> Result<String, AppError> {
        loop {
            let code = generate_code();

            if self.repository.insert_if_absent(&code, record.clone()).await? {
                return Ok(code);
            }

            debug!(code = %code, "Generated code collided, retrying");
        }
    }
}

/// `now + minutes`, or `None` when the result is not representable.
fn expiry_after(now: DateTime<Utc>, minutes: i64) -> Option<DateTime<Utc>> {
    Duration::try_minutes(minutes).and_then(|d| now.checked_add_signed(d))
}
