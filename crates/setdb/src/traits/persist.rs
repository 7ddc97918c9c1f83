use std::mem;

use crate::{Bytes, Error, Result, SIZE_OF_U64, Sink, Source, archive::read_to_vec};

/// A value that can write itself to a [`Sink`] and rebuild itself in place
/// from a [`Source`].
///
/// Set-like containers get this for free through [`SetLike`](crate::SetLike);
/// element types implement it directly or with `#[derive(Persist)]`.
pub trait Persist {
    /// Lower bound on the number of bytes one encoded value occupies.
    ///
    /// Used to bound capacity reservations and, in strict mode, to reject
    /// counts the remaining stream cannot possibly hold. Zero means unknown.
    const MIN_ENCODED_LEN: usize = 0;

    fn save<W: Sink + ?Sized>(&self, sink: &mut W) -> Result<()>;

    /// Overwrites `self` with a value read from `source`.
    fn load<R: Source + ?Sized>(&mut self, source: &mut R) -> Result<()>;
}

macro_rules! impl_persist_for_bytes {
    ($($t:ty),*) => {
        $(
            impl Persist for $t {
                const MIN_ENCODED_LEN: usize = size_of::<<$t as Bytes>::Array>();

                #[inline]
                fn save<W: Sink + ?Sized>(&self, sink: &mut W) -> Result<()> {
                    sink.write_all(self.to_bytes().as_ref())
                }

                #[inline]
                fn load<R: Source + ?Sized>(&mut self, source: &mut R) -> Result<()> {
                    let mut buf = [0u8; size_of::<<$t as Bytes>::Array>()];
                    source.read_exact(&mut buf)?;
                    *self = <$t>::from_bytes(&buf)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_persist_for_bytes!(
    u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64, bool, char
);

// Pointer-sized integers are always stored as 64 bits.
impl Persist for usize {
    const MIN_ENCODED_LEN: usize = SIZE_OF_U64;

    #[inline]
    fn save<W: Sink + ?Sized>(&self, sink: &mut W) -> Result<()> {
        sink.write_u64(*self as u64)
    }

    #[inline]
    fn load<R: Source + ?Sized>(&mut self, source: &mut R) -> Result<()> {
        let value = source.read_u64()?;
        *self = usize::try_from(value).map_err(|_| Error::LengthOverflow(value))?;
        Ok(())
    }
}

impl Persist for isize {
    const MIN_ENCODED_LEN: usize = SIZE_OF_U64;

    #[inline]
    fn save<W: Sink + ?Sized>(&self, sink: &mut W) -> Result<()> {
        (*self as i64).save(sink)
    }

    #[inline]
    fn load<R: Source + ?Sized>(&mut self, source: &mut R) -> Result<()> {
        let mut value = 0i64;
        value.load(source)?;
        *self = isize::try_from(value).map_err(|_| Error::LengthOverflow(value as u64))?;
        Ok(())
    }
}

impl Persist for () {
    #[inline]
    fn save<W: Sink + ?Sized>(&self, _: &mut W) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn load<R: Source + ?Sized>(&mut self, _: &mut R) -> Result<()> {
        Ok(())
    }
}

/// `[len: u64][utf-8 bytes]`
impl Persist for String {
    const MIN_ENCODED_LEN: usize = SIZE_OF_U64;

    fn save<W: Sink + ?Sized>(&self, sink: &mut W) -> Result<()> {
        sink.write_u64(self.len() as u64)?;
        sink.write_all(self.as_bytes())
    }

    fn load<R: Source + ?Sized>(&mut self, source: &mut R) -> Result<()> {
        let len = source.read_u64()?;
        if let Some(remaining) = source.remaining()
            && len > remaining
        {
            return Err(Error::Truncated {
                needed: len,
                remaining,
            });
        }
        let len = usize::try_from(len).map_err(|_| Error::LengthOverflow(len))?;

        let mut bytes = mem::take(self).into_bytes();
        read_to_vec(source, &mut bytes, len)?;
        *self = String::from_utf8(bytes)?;
        Ok(())
    }
}
