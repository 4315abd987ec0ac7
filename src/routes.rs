//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`            - Shorten a URL sent as plain text
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /ping`        - Database health check
//! - `POST /api/shorten` - Shorten a URL sent as JSON
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Access log** - One structured record per request
//! - **Compression** - Gzip request decoding and negotiated response encoding
//! - **Path normalization** - Trailing slash handling (served router only)

use crate::api;
use crate::api::handlers::{ping_handler, redirect_handler, submit_handler};
use crate::api::middleware::access_log::{self, SharedAccessLogger};
use crate::api::middleware::compression;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared capabilities injected into all handlers
/// - `logger` - destination of the per-request access records
pub fn router(state: AppState, logger: SharedAccessLogger) -> Router {
    Router::new()
        .route("/", post(submit_handler))
        .route("/ping", get(ping_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(middleware::from_fn(compression::layer))
        .layer(middleware::from_fn_with_state(logger, access_log::layer))
}

/// [`router`] with trailing slashes trimmed before routing.
pub fn app_router(state: AppState, logger: SharedAccessLogger) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, logger))
}
