//! Handler for the database health check.

use axum::{extract::State, http::StatusCode};

use crate::error::AppError;
use crate::state::AppState;

/// Reports whether the database accepts connections.
///
/// # Endpoint
///
/// `GET /ping`
///
/// # Response Codes
///
/// - **200 OK**: a connection was opened and closed
/// - **500 Internal Server Error**: the connection failed; the cause is
///   logged, not returned
pub async fn ping_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.probe.ping().await?;
    Ok(StatusCode::OK)
}
