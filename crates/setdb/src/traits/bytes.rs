use crate::{Error, Result};

/// Fixed-size little-endian codec for primitive values.
///
/// Every implementation writes exactly `size_of::<Self::Array>()` bytes, so
/// values round-trip identically across architectures.
pub trait Bytes: Sized {
    /// Byte representation, always a `[u8; N]`.
    type Array: AsRef<[u8]>;

    /// Serialize this value to its little-endian representation.
    fn to_bytes(&self) -> Self::Array;

    /// Deserialize a value from bytes.
    /// The input slice must be exactly `size_of::<Self::Array>()` bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

macro_rules! impl_bytes_for_numeric {
    ($($t:ty),*) => {
        $(
            impl Bytes for $t {
                type Array = [u8; size_of::<$t>()];

                #[inline]
                fn to_bytes(&self) -> Self::Array {
                    self.to_le_bytes()
                }

                #[inline]
                fn from_bytes(bytes: &[u8]) -> Result<Self> {
                    let arr: Self::Array = bytes.try_into().map_err(|_| Error::WrongLength)?;
                    Ok(<$t>::from_le_bytes(arr))
                }
            }
        )*
    };
}

impl_bytes_for_numeric!(
    u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64
);

impl Bytes for bool {
    type Array = [u8; 1];

    #[inline]
    fn to_bytes(&self) -> Self::Array {
        [*self as u8]
    }

    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [0] => Ok(false),
            [1] => Ok(true),
            [b] => Err(Error::InvalidBool(*b)),
            _ => Err(Error::WrongLength),
        }
    }
}

impl Bytes for char {
    type Array = [u8; 4];

    #[inline]
    fn to_bytes(&self) -> Self::Array {
        u32::from(*self).to_le_bytes()
    }

    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let scalar = u32::from_bytes(bytes)?;
        char::from_u32(scalar).ok_or(Error::InvalidChar(scalar))
    }
}
