use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{self, Write};

use super::ResponseSink;

/// Compresses everything written to it with gzip before it reaches `W`.
///
/// Output follows the encoder's streaming contract: compressed bytes are
/// only guaranteed to reach the inner sink after [`GzipWriter::close`].
/// Dropping the writer without closing still attempts to finish the stream,
/// but any error is lost.
pub struct GzipWriter<W: Write> {
    encoder: GzEncoder<W>,
}

impl<W: Write> GzipWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            encoder: GzEncoder::new(inner, Compression::default()),
        }
    }

    /// Writes the gzip trailer and returns the inner sink.
    pub fn close(self) -> io::Result<W> {
        self.encoder.finish()
    }
}

impl<W: Write> Write for GzipWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.encoder.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.encoder.flush()
    }
}

impl<W: ResponseSink> ResponseSink for GzipWriter<W> {
    fn headers(&self) -> &HeaderMap {
        self.encoder.get_ref().headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.encoder.get_mut().headers_mut()
    }

    /// Marks the body as gzip-encoded for success and redirect statuses.
    /// Other statuses are forwarded without the header.
    fn write_status(&mut self, status: StatusCode) {
        if status.as_u16() < 300 {
            self.headers_mut()
                .insert(header::CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        }
        self.encoder.get_mut().write_status(status);
    }
}
