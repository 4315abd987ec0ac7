//! Gzip decoding of request bodies and negotiated gzip encoding of responses.
//!
//! # Inbound
//!
//! A request declaring `Content-Encoding: gzip` has its body decompressed
//! before the handler runs. Malformed gzip input is rejected with
//! `400 Bad Request` and the handler is never called.
//!
//! # Outbound
//!
//! The encoding decision depends on the final body size, which is only known
//! once the handler is done. The handler's response is therefore buffered in
//! full, the decision is made, and only then are headers and body emitted
//! through the writer chain:
//!
//! ```text
//! compress:  GzipWriter -> SizeTracker -> BufferedResponse
//! otherwise:               SizeTracker -> BufferedResponse
//! ```
//!
//! A response is gzip-encoded when all of these hold:
//!
//! - its status is below 300
//! - it is larger than [`GZIP_MIN_SIZE`] bytes
//! - the request's `Accept-Encoding` lists `gzip`
//! - its `Content-Type` is one of [`GZIP_CONTENT_TYPES`]
//! - it does not already carry a `Content-Encoding`

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::io::{Cursor, Read};
use tracing::debug;

use crate::api::MAX_BODY_SIZE;
use crate::api::writer::{BufferedResponse, GzipReader, GzipWriter, SizeTracker, replay};
use crate::error::AppError;

/// Responses must be strictly larger than this to be compressed.
pub const GZIP_MIN_SIZE: usize = 1400;

/// Content types eligible for compression.
pub const GZIP_CONTENT_TYPES: [&str; 2] = ["application/json", "text/html"];

/// Compression middleware.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", post(submit_handler))
///     .layer(middleware::from_fn(compression::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let accepts_gzip = accepts_gzip(req.headers());

    let req = match decode_request(req).await {
        Ok(req) => req,
        Err(e) => return e.into_response(),
    };

    let response = next.run(req).await;

    match encode_response(response, accepts_gzip).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

/// Decides whether a finished response should be gzip-encoded.
pub fn should_compress(size: usize, accepts_gzip: bool, content_type: Option<&str>) -> bool {
    size > GZIP_MIN_SIZE && accepts_gzip && content_type.is_some_and(is_compressible_type)
}

/// Returns `true` if `Accept-Encoding` lists `gzip` with a non-zero quality.
pub fn accepts_gzip(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT_ENCODING)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|entry| {
            let mut params = entry.split(';').map(str::trim);
            let coding = params.next().unwrap_or_default();

            coding.eq_ignore_ascii_case("gzip") && !params.any(is_zero_quality)
        })
}

fn is_zero_quality(param: &str) -> bool {
    param
        .strip_prefix("q=")
        .and_then(|q| q.parse::<f32>().ok())
        .is_some_and(|q| q == 0.0)
}

fn is_gzip_encoded(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::CONTENT_ENCODING)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|coding| coding.trim().eq_ignore_ascii_case("gzip"))
}

fn is_compressible_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();

    GZIP_CONTENT_TYPES
        .iter()
        .any(|allowed| essence.eq_ignore_ascii_case(allowed))
}

async fn decode_request(req: Request) -> Result<Request, AppError> {
    if !is_gzip_encoded(req.headers()) {
        return Ok(req);
    }

    let (mut parts, body) = req.into_parts();

    let compressed = to_bytes(body, MAX_BODY_SIZE)
        .await
        .map_err(|e| AppError::bad_request(format!("Unreadable request body: {e}")))?;

    let reader = GzipReader::new(Cursor::new(compressed))
        .map_err(|e| AppError::bad_request(format!("Invalid gzip body: {e}")))?;

    let invalid = |e: std::io::Error| AppError::bad_request(format!("Invalid gzip body: {e}"));

    let mut decoded = Vec::new();
    let mut limited = reader.take(MAX_BODY_SIZE as u64 + 1);
    limited.read_to_end(&mut decoded).map_err(invalid)?;

    if decoded.len() > MAX_BODY_SIZE {
        return Err(AppError::bad_request(
            "Decompressed request body exceeds size limit",
        ));
    }

    limited.into_inner().close().map_err(invalid)?;

    debug!(decoded = decoded.len(), "Request body decompressed");

    parts.headers.remove(header::CONTENT_ENCODING);
    parts.headers.remove(header::CONTENT_LENGTH);

    Ok(Request::from_parts(parts, Body::from(decoded)))
}

async fn encode_response(response: Response, accepts_gzip: bool) -> Result<Response, AppError> {
    let (mut parts, body) = response.into_parts();

    let body = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| AppError::internal(format!("Failed to buffer response body: {e}")))?;

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let compress = parts.status.as_u16() < 300
        && !parts.headers.contains_key(header::CONTENT_ENCODING)
        && should_compress(body.len(), accepts_gzip, content_type);

    let status = parts.status;
    let headers = std::mem::take(&mut parts.headers);
    let write_failed = |e: std::io::Error| AppError::internal(format!("Failed to encode response: {e}"));

    let tracker = SizeTracker::new(BufferedResponse::new());
    let tracker = if compress {
        let mut writer = GzipWriter::new(tracker);
        replay(&mut writer, status, headers, &body).map_err(write_failed)?;
        writer.close().map_err(write_failed)?
    } else {
        let mut tracker = tracker;
        replay(&mut tracker, status, headers, &body).map_err(write_failed)?;
        tracker
    };

    debug!(
        original = body.len(),
        sent = tracker.size(),
        gzip = compress,
        "Response encoded"
    );

    Ok(tracker.into_inner().into_response(parts))
}
