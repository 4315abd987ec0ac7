//! HTTP-facing error type.
//!
//! Every failure that reaches a handler boundary collapses into [`AppError`].
//! Responses carry the status code only; the reason is logged, never returned
//! to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::{ProbeError, ShortenerError};
use crate::utils::url_validator::UrlValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input or a failed domain operation. Rendered as `400`.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A dependency the service relies on is unreachable. Rendered as `500`.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(_) => tracing::debug!(error = %self, "Request rejected"),
            AppError::Internal(_) => tracing::error!(error = %self, "Request failed"),
        }

        self.status().into_response()
    }
}

// Not found, invalid key and storage faults all map to the same client error.
impl From<ShortenerError> for AppError {
    fn from(e: ShortenerError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<UrlValidationError> for AppError {
    fn from(e: UrlValidationError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<ProbeError> for AppError {
    fn from(e: ProbeError) -> Self {
        AppError::Internal(e.to_string())
    }
}
