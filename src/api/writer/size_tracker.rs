use axum::http::{HeaderMap, StatusCode};
use std::io::{self, Write};

use super::ResponseSink;

/// Forwards writes unchanged and counts the bytes the inner sink accepted.
#[derive(Debug)]
pub struct SizeTracker<W> {
    inner: W,
    size: usize,
}

impl<W> SizeTracker<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, size: 0 }
    }

    /// Total bytes written so far.
    pub fn size(&self) -> usize {
        self.size
    }

    #[cfg(test)]
    pub(crate) fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for SizeTracker<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.size += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: ResponseSink> ResponseSink for SizeTracker<W> {
    fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn write_status(&mut self, status: StatusCode) {
        self.inner.write_status(status);
    }
}
