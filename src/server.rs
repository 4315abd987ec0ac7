//! HTTP server initialization and runtime setup.
//!
//! Wires the collaborators into [`AppState`], builds the router and runs the
//! Axum server until Ctrl+C.

use crate::api::middleware::access_log::{SharedAccessLogger, TracingAccessLogger};
use crate::config::Config;
use crate::infrastructure::{MemoryShortener, PgProbe};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let shortener = Arc::new(MemoryShortener::new(&config.base_url));
    let probe = Arc::new(PgProbe::new(&config.database_dsn));
    let state = AppState::new(shortener, probe);

    let logger: SharedAccessLogger = Arc::new(TracingAccessLogger);
    let app = app_router(state, logger);

    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
