//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Required Variables
//!
//! - `CLIENT_ID` - Deployment client identifier
//! - `CLIENT_SECRET` - Deployment client secret
//!
//! The service refuses to start if either is missing or empty. Neither value is
//! used by request handling.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-Proto` when building short URLs (default: `false`)
//! - `DEFAULT_VALIDITY_MINUTES` - Link lifetime when a request gives none (default: 30)
//! - `SWEEP_INTERVAL_SECONDS` - Background eviction period, `0` disables (default: 0)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::link_service::DEFAULT_VALIDITY_MINUTES;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Opaque deployment credential. Checked at startup only.
    pub client_id: String,
    /// Opaque deployment credential. Checked at startup only; never logged.
    pub client_secret: String,
    /// When true, short URLs use the scheme from `X-Forwarded-Proto`.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub default_validity_minutes: i64,
    /// Period of the background expiry sweep in seconds. `0` disables it.
    pub sweep_interval_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CLIENT_ID` or `CLIENT_SECRET` is not set.
    pub fn from_env() -> Result<Self> {
        let client_id = env::var("CLIENT_ID").context("CLIENT_ID must be set")?;
        let client_secret = env::var("CLIENT_SECRET").context("CLIENT_SECRET must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_VALIDITY_MINUTES);

        let sweep_interval_seconds = env::var("SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            client_id,
            client_secret,
            behind_proxy,
            default_validity_minutes,
            sweep_interval_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `client_id` or `client_secret` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `default_validity_minutes` is not positive
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            anyhow::bail!("CLIENT_ID must not be empty");
        }

        if self.client_secret.trim().is_empty() {
            anyhow::bail!("CLIENT_SECRET must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.default_validity_minutes <= 0 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be greater than 0, got {}",
                self.default_validity_minutes
            );
        }

        Ok(())
    }

    /// Returns the sweep period, or `None` when sweeping is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_seconds > 0).then(|| Duration::from_secs(self.sweep_interval_seconds))
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Client ID: {}", self.client_id);
        tracing::info!("  Client secret: {}", mask_secret(&self.client_secret));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );

        match self.sweep_interval() {
            Some(period) => tracing::info!("  Expiry sweep: every {}s", period.as_secs()),
            None => tracing::info!("  Expiry sweep: disabled"),
        }
    }
}

/// Masks a secret for logging, keeping at most the first two characters.
///
/// - `supersecret` → `su***`
/// - `ab` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(2).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
