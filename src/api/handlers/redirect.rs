//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
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
/// # Response
///
/// `307 Temporary Redirect` with `Location` set to the original URL and no body.
///
/// # Errors
///
/// Returns `400 Bad Request` with an empty body if the code is unknown or
/// cannot be resolved for any other reason.
pub async fn redirect_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = code.map_err(|e| AppError::bad_request(e.body_text()))?;

    let original_url = state.shortener.resolve(&code).await?;

    let location = HeaderValue::from_bytes(original_url.as_bytes()).map_err(|_| {
        AppError::bad_request(format!("Stored URL for {code} is not a valid header value"))
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
