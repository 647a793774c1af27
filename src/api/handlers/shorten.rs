//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, Uri},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::extract_origin;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com/some/long/path",
///   "customShortCode": "promo2025",   // optional
///   "validityMinutes": 60            // optional, default 30
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortUrl": "http://sho.rt/promo2025",
///   "originalUrl": "https://example.com/some/long/path",
///   "expiresAt": "2025-01-01T12:00:00Z",
///   "customShortCodeUsed": true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body, URL or custom code is invalid.
/// Returns 409 Conflict if the custom code is already in use.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let origin = extract_origin(&headers, &uri, state.behind_proxy)?;

    let custom_code = payload.custom_code();
    let long_url = payload
        .long_url
        .ok_or_else(|| AppError::bad_request("longUrl is required", json!({})))?;

    let link = state
        .link_service
        .create_short_link(&long_url, custom_code, payload.validity_minutes)
        .await?;

    let short_url = state
        .link_service
        .get_short_url(&origin.scheme, &origin.host, &link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url,
            original_url: link.record.original_url,
            expires_at: link.record.expires_at,
            custom_short_code_used: link.record.is_custom_code,
        }),
    ))
}
