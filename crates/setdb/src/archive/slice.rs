use crate::{Error, Options, Persist, Result, Source};

/// Source reading from a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
    options: Options,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8], options: Options) -> Self {
        Self {
            bytes,
            pos: 0,
            options,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not consumed yet.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

impl Source for SliceSource<'_> {
    #[inline]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        read_from_slice(self.bytes, &mut self.pos, buf)
    }

    #[inline]
    fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    fn remaining(&self) -> Option<u64> {
        Some((self.bytes.len() - self.pos) as u64)
    }
}

/// Copies `buf.len()` bytes from `bytes[*pos..]`, advancing `pos`.
/// Leaves `pos` untouched when fewer bytes remain.
#[inline]
pub(crate) fn read_from_slice(bytes: &[u8], pos: &mut usize, buf: &mut [u8]) -> Result<()> {
    let remaining = bytes.len() - *pos;
    if buf.len() > remaining {
        return Err(Error::Truncated {
            needed: buf.len() as u64,
            remaining: remaining as u64,
        });
    }
    let end = *pos + buf.len();
    buf.copy_from_slice(&bytes[*pos..end]);
    *pos = end;
    Ok(())
}

/// Loads `value` in place from `bytes`.
pub fn load_from_slice<T: Persist>(bytes: &[u8], value: &mut T, options: Options) -> Result<()> {
    let mut source = SliceSource::new(bytes, options);
    value.load(&mut source)
}
