//! Stream wrappers composing the outbound response path.
//!
//! Every wrapper implements [`ResponseSink`]: it accepts bytes through
//! [`std::io::Write`] and a status through [`ResponseSink::write_status`],
//! and forwards both to the sink it owns. The middleware assembles a chain
//! explicitly, for example:
//!
//! ```text
//! GzipWriter -> SizeTracker -> BufferedResponse
//! ```
//!
//! [`BufferedResponse`] terminates the chain and turns what it received back
//! into an axum [`Response`](axum::response::Response).
//!
//! [`GzipReader`] is the inbound counterpart used to decode request bodies.

mod buffered;
mod gzip_reader;
mod gzip_writer;
mod size_tracker;

pub use buffered::BufferedResponse;
pub use gzip_reader::GzipReader;
pub use gzip_writer::GzipWriter;
pub use size_tracker::SizeTracker;

use axum::http::{HeaderMap, StatusCode, header};
use std::io::{self, Write};

/// Write side of an HTTP response: headers, a status, then body bytes.
pub trait ResponseSink: Write {
    fn headers(&self) -> &HeaderMap;

    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Records the response status. Headers set afterwards may be ignored by
    /// sinks that commit on status.
    fn write_status(&mut self, status: StatusCode);
}

/// Feeds an already produced response through `sink`.
///
/// Headers are copied first, then the status is written, then the body.
/// `Content-Length` is dropped because wrappers may change the body size;
/// the terminal buffer recomputes it.
pub fn replay<S: ResponseSink>(
    sink: &mut S,
    status: StatusCode,
    mut headers: HeaderMap,
    body: &[u8],
) -> io::Result<()> {
    headers.remove(header::CONTENT_LENGTH);
    sink.headers_mut().extend(headers);
    sink.write_status(status);
    sink.write_all(body)?;
    sink.flush()
}
