//! Handler for JSON link submission.

use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::read_body;
use crate::api::dto::shorten::UrlProcessingResult;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::parse_absolute_url;

/// Shortens the URL given in a JSON body.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`, `Content-Type: application/json`:
///
/// ```json
/// { "result": "http://localhost:8080/AbCdEfGhIjKl" }
/// ```
///
/// # Errors
///
/// Returns `400 Bad Request` with an empty body if the JSON cannot be
/// decoded, `url` is not an absolute URL, or the shortener fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Body,
) -> Result<impl IntoResponse, AppError> {
    let body = read_body(body).await?;

    let mut payload: UrlProcessingResult = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(format!("Invalid JSON body: {e}")))?;

    parse_absolute_url(&payload.url)?;

    payload.result = state.shortener.shorten(&payload.url).await?;

    let json = serde_json::to_vec(&payload)
        .map_err(|e| AppError::bad_request(format!("Failed to encode response: {e}")))?;

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    ))
}
