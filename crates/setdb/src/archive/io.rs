use std::io::{Read, Write};

use crate::{Options, Result, Sink, Source};

/// Sink over any [`Write`].
///
/// Writes are forwarded as they come, wrap the writer in a `BufWriter` for
/// files and sockets.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
    written: u64,
    options: Options,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W, options: Options) -> Self {
        Self {
            inner,
            written: 0,
            options,
        }
    }

    /// Total bytes written through this sink.
    #[inline]
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        Ok(self.inner.flush()?)
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for IoSink<W> {
    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    #[inline]
    fn options(&self) -> &Options {
        &self.options
    }
}

/// Source over any [`Read`].
///
/// A short read surfaces as the reader's own `UnexpectedEof` error.
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    remaining: Option<u64>,
    options: Options,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R, options: Options) -> Self {
        Self {
            inner,
            remaining: None,
            options,
        }
    }

    /// Declares how many bytes the reader holds, e.g. a file's length.
    pub fn with_len(mut self, len: u64) -> Self {
        self.remaining = Some(len);
        self
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Source for IoSource<R> {
    #[inline]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf)?;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(buf.len() as u64);
        }
        Ok(())
    }

    #[inline]
    fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    fn remaining(&self) -> Option<u64> {
        self.remaining
    }
}
