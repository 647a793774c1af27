//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code in the registry
/// 2. Evict and answer 410 if it has expired
/// 3. Otherwise count the click and answer 301 Moved Permanently
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the short code has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(long_url).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            serde_json::json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
