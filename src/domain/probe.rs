//! Database reachability capability consumed by the health check.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Database DSN is not configured")]
    NotConfigured,

    #[error("Database connection failed: {0}")]
    Connect(String),
}

/// Answers "can a connection be opened against the configured DSN".
///
/// Implementations open and release the connection within a single call;
/// nothing is pooled or reused between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionProbe: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`ProbeError`] when no connection could be established.
    async fn ping(&self) -> Result<(), ProbeError>;
}
