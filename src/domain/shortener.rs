//! Shorten/resolve capability consumed by the request handlers.

use async_trait::async_trait;

/// Errors reported by a [`Shortener`].
///
/// The edge layer does not distinguish between these at the HTTP level; every
/// variant is rendered as `400 Bad Request`.
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    #[error("Short code not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to allocate a unique short code")]
    CodeExhausted,

    #[error("Storage failure: {0}")]
    Storage(String),
}

/// URL shortening and resolution.
///
/// # Implementations
///
/// - [`crate::infrastructure::MemoryShortener`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Produces the short URL for `original_url`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShortenerError`] if the URL cannot be stored.
    async fn shorten(&self, original_url: &str) -> Result<String, ShortenerError>;

    /// Returns the original URL behind `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] for unknown codes.
    async fn resolve(&self, short_code: &str) -> Result<String, ShortenerError>;
}
