//! Handler for plain-text link submission.

use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::read_body;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::parse_absolute_url;

/// Shortens the URL sent as the raw request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```text
/// https://example.com/some/long/path
/// ```
///
/// # Response
///
/// `201 Created`, `Content-Type: text/plain`, body is the short URL.
///
/// # Errors
///
/// Returns `400 Bad Request` with an empty body if the body is not UTF-8,
/// is not an absolute URL, or the shortener fails. The shortener is not
/// called for invalid URLs.
pub async fn submit_handler(
    State(state): State<AppState>,
    body: Body,
) -> Result<impl IntoResponse, AppError> {
    let body = read_body(body).await?;
    let original_url = String::from_utf8(body.to_vec())
        .map_err(|e| AppError::bad_request(format!("Body is not UTF-8: {e}")))?;

    parse_absolute_url(&original_url)?;

    let short_url = state.shortener.shorten(&original_url).await?;

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "text/plain")],
        short_url,
    ))
}
