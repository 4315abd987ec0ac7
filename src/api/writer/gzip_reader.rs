use flate2::read::GzDecoder;
use std::io::{self, Read};

/// Exposes the decompressed contents of a gzip stream.
///
/// The gzip header is parsed on construction, so a stream that is not gzip
/// at all is rejected before any body byte is consumed by the caller.
/// [`close`](Self::close) ends the stream; dropping the reader without
/// closing it releases the decoder and the inner stream without checks.
pub struct GzipReader<R: Read> {
    decoder: GzDecoder<R>,
}

impl<R: Read> GzipReader<R> {
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidData`] if `inner` does not start with a
    /// complete gzip header.
    pub fn new(inner: R) -> io::Result<Self> {
        let decoder = GzDecoder::new(inner);

        if decoder.header().is_none() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "malformed gzip header",
            ));
        }

        Ok(Self { decoder })
    }

    /// Finishes the gzip stream and hands back the inner stream.
    ///
    /// Any compressed data the caller did not read is decoded and discarded,
    /// so a corrupt or truncated trailer is reported here even if the caller
    /// stopped reading early.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the decoder or the inner stream.
    pub fn close(mut self) -> io::Result<R> {
        io::copy(&mut self.decoder, &mut io::sink())?;
        Ok(self.decoder.into_inner())
    }
}

impl<R: Read> Read for GzipReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.decoder.read(buf)
    }
}
