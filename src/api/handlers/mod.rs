//! HTTP request handlers.
//!
//! Handlers read request bodies themselves instead of using axum's body
//! extractors, so that every rejection goes through [`AppError`] and is
//! rendered without a body.

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod submit;

pub use health::ping_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use submit::submit_handler;

use axum::body::{Body, Bytes, to_bytes};

use crate::api::MAX_BODY_SIZE;
use crate::error::AppError;

/// Reads the whole request body, up to [`MAX_BODY_SIZE`].
async fn read_body(body: Body) -> Result<Bytes, AppError> {
    to_bytes(body, MAX_BODY_SIZE)
        .await
        .map_err(|e| AppError::bad_request(format!("Unreadable request body: {e}")))
}
