//! Per-request access log.
//!
//! Every response is passed through a [`MeteredWriter`] that records the
//! status and counts body bytes. Once the inner pipeline is done a single
//! [`AccessRecord`] is handed to the configured [`AccessLogger`].
//!
//! # Example Logs
//!
//! ```text
//! INFO Request handled uri=/api/shorten method=POST status=201 size=36 duration_ms=0.41
//! ```

use axum::{
    body::{Bytes, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::writer::{BufferedResponse, ResponseSink, SizeTracker, replay};

/// Status, size and timing of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Final status code, `0` if none was written.
    pub status: u16,
    /// Body bytes written.
    pub size: usize,
    pub duration: Duration,
}

/// One access log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    pub uri: String,
    pub method: Method,
    pub metadata: ResponseMetadata,
}

/// Destination for access records.
///
/// Implementations must not fail the request; there is no way to report an
/// error back to the middleware.
pub trait AccessLogger: Send + Sync {
    fn log(&self, record: &AccessRecord);
}

pub type SharedAccessLogger = Arc<dyn AccessLogger>;

/// Emits access records as `tracing` events at `INFO`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAccessLogger;

impl AccessLogger for TracingAccessLogger {
    fn log(&self, record: &AccessRecord) {
        tracing::info!(
            uri = %record.uri,
            method = %record.method,
            status = record.metadata.status,
            size = record.metadata.size,
            duration_ms = record.metadata.duration.as_secs_f64() * 1000.0,
            "Request handled"
        );
    }
}

/// Records the status passing to `W`; byte counting is left to the
/// [`SizeTracker`] it wraps.
#[derive(Debug)]
pub struct MeteredWriter<W> {
    inner: SizeTracker<W>,
    status: u16,
}

impl<W> MeteredWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: SizeTracker::new(inner),
            status: 0,
        }
    }

    pub fn metadata(&self, duration: Duration) -> ResponseMetadata {
        ResponseMetadata {
            status: self.status,
            size: self.inner.size(),
            duration,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write> Write for MeteredWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: ResponseSink> ResponseSink for MeteredWriter<W> {
    fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status = status.as_u16();
        self.inner.write_status(status);
    }
}

/// Access log middleware.
///
/// # Integration
///
/// ```rust,ignore
/// let logger: SharedAccessLogger = Arc::new(TracingAccessLogger);
/// let app = Router::new()
///     .route("/", post(submit_handler))
///     .layer(middleware::from_fn_with_state(logger, access_log::layer));
/// ```
pub async fn layer(
    State(logger): State<SharedAccessLogger>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let uri = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), |pq| pq.as_str().to_string());
    let method = req.method().clone();

    let response = next.run(req).await;
    let (mut parts, body) = response.into_parts();

    let body = match to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, %uri, "Failed to read response body");
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            Bytes::new()
        }
    };

    let status = parts.status;
    let headers = std::mem::take(&mut parts.headers);

    let mut writer = MeteredWriter::new(BufferedResponse::new());
    if let Err(e) = replay(&mut writer, status, headers, &body) {
        tracing::error!(error = %e, %uri, "Failed to write response");
    }

    let record = AccessRecord {
        uri,
        method,
        metadata: writer.metadata(start.elapsed()),
    };
    logger.log(&record);

    writer.into_inner().into_response(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metered_writer_records_status_and_size() {
        let mut writer = MeteredWriter::new(BufferedResponse::new());
        writer.write_status(StatusCode::CREATED);
        writer.write_all(&[b'x'; 40]).unwrap();
        writer.write_all(b"!!").unwrap();

        let metadata = writer.metadata(Duration::from_millis(3));
        assert_eq!(metadata.status, 201);
        assert_eq!(metadata.size, 42);
        assert_eq!(metadata.duration, Duration::from_millis(3));

        let sink = writer.into_inner();
        assert_eq!(sink.status(), Some(StatusCode::CREATED));
        assert_eq!(sink.body().len(), 42);
    }

    #[test]
    fn test_metered_writer_counts_through_gzip_chain() {
        use crate::api::writer::GzipWriter;

        let payload = b"{\"result\":\"http://localhost:8080/abc\"}".repeat(64);

        let mut gzip = GzipWriter::new(MeteredWriter::new(BufferedResponse::new()));
        gzip.write_status(StatusCode::OK);
        gzip.write_all(&payload).unwrap();
        let writer = gzip.close().unwrap();

        let metadata = writer.metadata(Duration::ZERO);
        assert_eq!(metadata.status, 200);
        assert!(metadata.size > 0 && metadata.size < payload.len());
        assert_eq!(writer.into_inner().body().len(), metadata.size);
    }

    #[test]
    fn test_status_is_zero_until_written() {
        let mut writer = MeteredWriter::new(BufferedResponse::new());
        writer.write_all(b"body").unwrap();

        let metadata = writer.metadata(Duration::ZERO);
        assert_eq!(metadata.status, 0);
        assert_eq!(metadata.size, 4);
    }
}
