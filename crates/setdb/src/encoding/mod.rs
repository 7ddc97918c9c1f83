use crate::{Bytes, Error, Result};

#[cfg(feature = "lz4")]
mod lz4;
mod sequence;
mod strategy;
#[cfg(feature = "zstd")]
mod zstd;

#[cfg(feature = "lz4")]
pub use self::lz4::*;
pub use sequence::*;
pub use strategy::*;
#[cfg(feature = "zstd")]
pub use self::zstd::*;

/// Bulk encoding applied to the element sequence of a set.
///
/// The count prefix is never encoded; only the elements after it are.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Encoding {
    /// Elements written one after another, no framing.
    #[default]
    Plain = 0,

    // ============================================================================
    // Compressed encodings, one `[len: u64][block]` after the count
    // ============================================================================
    /// LZ4 compression (fastest compression/decompression, moderate ratio).
    LZ4 = 65,
    /// Zstd compression (highest compression ratio, slower).
    Zstd = 66,
}

impl Encoding {
    #[inline]
    pub fn is_plain(&self) -> bool {
        *self == Self::Plain
    }

    #[inline]
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::LZ4 | Self::Zstd)
    }

    #[inline]
    pub fn is_lz4(&self) -> bool {
        *self == Self::LZ4
    }

    #[inline]
    pub fn is_zstd(&self) -> bool {
        *self == Self::Zstd
    }

    /// Whether this build can encode and decode with `self`.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Plain => true,
            Self::LZ4 => cfg!(feature = "lz4"),
            Self::Zstd => cfg!(feature = "zstd"),
        }
    }

    pub(crate) fn compress(self, bytes: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Plain => Ok(bytes.to_vec()),
            #[cfg(feature = "lz4")]
            Self::LZ4 => LZ4Strategy::compress(bytes),
            #[cfg(feature = "zstd")]
            Self::Zstd => ZstdStrategy::compress(bytes),
            #[allow(unreachable_patterns)]
            encoding => Err(Error::UnsupportedEncoding(encoding)),
        }
    }

    pub(crate) fn decompress(self, bytes: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Plain => Ok(bytes.to_vec()),
            #[cfg(feature = "lz4")]
            Self::LZ4 => LZ4Strategy::decompress(bytes),
            #[cfg(feature = "zstd")]
            Self::Zstd => ZstdStrategy::decompress(bytes),
            #[allow(unreachable_patterns)]
            encoding => Err(Error::UnsupportedEncoding(encoding)),
        }
    }
}

impl Bytes for Encoding {
    type Array = [u8; size_of::<Self>()];

    #[inline]
    fn to_bytes(&self) -> Self::Array {
        [*self as u8]
    }

    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::WrongLength);
        }
        match bytes[0] {
            0 => Ok(Self::Plain),
            65 => Ok(Self::LZ4),
            66 => Ok(Self::Zstd),
            b => Err(Error::InvalidEncoding(b)),
        }
    }
}
