//! API route configuration.

use crate::api::handlers::{analytics_handler, health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};

const SHORTEN_PATH_CODE: &str = "shorten";

/// Public routes.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a short link
/// - `GET  /analytics/{code}`   - Click analytics for a short link
/// - `GET  /api/health`         - Health check
/// - `GET  /{code}`             - Short link redirect
///
/// Fixed routes other than `/shorten` have a different segment count from
/// `/{code}`. `GET /shorten` is forwarded to the redirect handler so the
/// custom code `shorten` stays reachable.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).get(|state: State<AppState>| {
                redirect_handler(Path(SHORTEN_PATH_CODE.to_string()), state)
            }),
        )
        .route("/analytics/{code}", get(analytics_handler))
        .route("/api/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
