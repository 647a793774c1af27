//! HTTP server initialization and runtime setup.
//!
//! Handles registry creation, background task spawning, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::memory::{InMemoryUrlRepository, run_expiry_sweeper};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory URL registry
/// - Optional background expiry sweeper
/// - Axum HTTP server with graceful shutdown
///
/// The registry lives exactly as long as this function; all links are lost
/// when the server stops.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryUrlRepository::new());
    tracing::info!("URL registry initialized");

    if let Some(period) = config.sweep_interval() {
        tokio::spawn(run_expiry_sweeper(repository.clone(), period));
        tracing::info!("Expiry sweeper started (every {}s)", period.as_secs());
    }

    let state = AppState::new(
        repository,
        config.default_validity_minutes,
        config.behind_proxy,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
