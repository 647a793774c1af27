//! Handler for per-link analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click analytics for a short link.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// # Response
///
/// ```json
/// {
///   "shortCode": "promo2025",
///   "originalUrl": "https://example.com",
///   "clicks": 42,
///   "expiresAt": "2025-01-01T12:00:00Z",
///   "customShortCodeUsed": true
/// }
/// ```
///
/// Expired links that have not been requested since expiry still report
/// their last state; only a redirect attempt evicts them.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let link = state.stats_service.get_link_stats(&code).await?;

    Ok(Json(link.into()))
}
