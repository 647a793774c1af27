//! Scheme and host extraction from HTTP requests.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// The scheme and host a client used to reach the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

/// Extracts the public origin of a request.
///
/// The host comes from the `Host` header (port preserved), falling back to the
/// request URI authority. The scheme is `http` unless `behind_proxy` is set and
/// the proxy supplied `X-Forwarded-Proto`, or the URI itself is absolute.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no host can be determined or the
/// `Host` header contains invalid characters.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let origin = extract_origin(&headers, &"/shorten".parse().unwrap(), false).unwrap();
/// assert_eq!(origin.host, "sho.rt:8080");
/// assert_eq!(origin.scheme, "http");
/// ```
pub fn extract_origin(
    headers: &HeaderMap,
    uri: &Uri,
    behind_proxy: bool,
) -> Result<RequestOrigin, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .trim()
            .to_string(),
        None => uri
            .authority()
            .map(|a| a.as_str().to_string())
            .unwrap_or_default(),
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let forwarded = if behind_proxy {
        headers
            .get(FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            // Proxies may chain values: "https, http"
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
    } else {
        None
    };

    let scheme = forwarded
        .or_else(|| uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| "http".to_string());

    Ok(RequestOrigin { scheme, host })
}
