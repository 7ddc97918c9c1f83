use crate::{Options, Persist, Result, Sink};

/// Sink appending to an owned, growable buffer.
#[derive(Debug, Default, Clone)]
pub struct VecSink {
    buf: Vec<u8>,
    options: Options,
}

impl VecSink {
    pub fn new(options: Options) -> Self {
        Self {
            buf: Vec::new(),
            options,
        }
    }

    pub fn with_capacity(capacity: usize, options: Options) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            options,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Sink for VecSink {
    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    #[inline]
    fn options(&self) -> &Options {
        &self.options
    }
}

/// Saves `value` into a fresh buffer.
pub fn save_to_vec<T: Persist>(value: &T, options: Options) -> Result<Vec<u8>> {
    let mut sink = VecSink::new(options);
    value.save(&mut sink)?;
    Ok(sink.into_bytes())
}
