use crate::{Bytes, Encoding, Options, Persist, Result, SIZE_OF_U64};

mod file;
mod header;
mod io;
mod slice;
mod vec;

pub use file::*;
pub use header::*;
pub use io::*;
pub use slice::*;
pub use vec::*;

pub(crate) use slice::read_from_slice;

/// Largest buffer growth step when reading a length-prefixed run of bytes.
const READ_CHUNK: usize = 64 * 1024;

/// Write side of an archive.
pub trait Sink {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    fn options(&self) -> &Options;

    #[inline]
    fn encoding(&self) -> Encoding {
        self.options().encoding
    }

    /// Writes a fixed-width little-endian count.
    #[inline]
    fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_all(&value.to_bytes())
    }

    /// Saves `value` and returns the sink for chaining.
    fn save<T: Persist>(&mut self, value: &T) -> Result<&mut Self>
    where
        Self: Sized,
    {
        value.save(self)?;
        Ok(self)
    }
}

/// Read side of an archive.
pub trait Source {
    /// Fills `buf` completely or fails without a partial result.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    fn options(&self) -> &Options;

    /// Bytes left in the stream, when the source knows it.
    #[inline]
    fn remaining(&self) -> Option<u64> {
        None
    }

    #[inline]
    fn encoding(&self) -> Encoding {
        self.options().encoding
    }

    #[inline]
    fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; SIZE_OF_U64];
        self.read_exact(&mut buf)?;
        u64::from_bytes(&buf)
    }

    /// Loads into `value` in place and returns the source for chaining.
    fn load<T: Persist>(&mut self, value: &mut T) -> Result<&mut Self>
    where
        Self: Sized,
    {
        value.load(self)?;
        Ok(self)
    }

    /// Loads a fresh `T`, starting from its default.
    fn read<T: Persist + Default>(&mut self) -> Result<T>
    where
        Self: Sized,
    {
        let mut value = T::default();
        value.load(self)?;
        Ok(value)
    }
}

/// Replaces the contents of `buf` with the next `len` bytes of `source`.
///
/// A `len` the source is known to hold is reserved at once. Otherwise the
/// buffer grows one chunk per read, so a corrupted length fails on the missing
/// bytes instead of on a huge allocation.
pub(crate) fn read_to_vec<R: Source + ?Sized>(
    source: &mut R,
    buf: &mut Vec<u8>,
    len: usize,
) -> Result<()> {
    buf.clear();
    if source.remaining().is_some_and(|remaining| len as u64 <= remaining) {
        buf.try_reserve_exact(len)?;
    }
    while buf.len() < len {
        let start = buf.len();
        let end = start + (len - start).min(READ_CHUNK);
        buf.try_reserve(end - start)?;
        buf.resize(end, 0);
        source.read_exact(&mut buf[start..])?;
    }
    Ok(())
}
