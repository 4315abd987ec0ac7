use axum::{
    body::Body,
    http::{HeaderMap, StatusCode, response::Parts},
    response::Response,
};
use std::io::{self, Write};

use super::ResponseSink;

/// Terminal sink holding the whole response in memory.
///
/// Nothing reaches the transport until [`BufferedResponse::into_response`]
/// is called, so upstream wrappers may still change headers after the body
/// has been written.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded by [`ResponseSink::write_status`], if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Builds the final response, keeping version and extensions from `parts`.
    ///
    /// The status falls back to the one in `parts` when none was written.
    pub fn into_response(self, mut parts: Parts) -> Response {
        if let Some(status) = self.status {
            parts.status = status;
        }
        parts.headers = self.headers;

        Response::from_parts(parts, Body::from(self.body))
    }
}

impl Write for BufferedResponse {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ResponseSink for BufferedResponse {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }
}
