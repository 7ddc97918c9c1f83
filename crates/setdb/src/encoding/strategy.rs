use crate::Result;

/// Compression backend for an encoded element block.
///
/// Operates on the plain byte layout of the elements, so it works for any
/// element type, fixed-size or not.
pub trait CompressionStrategy {
    /// Compress the plain-encoded elements into one block.
    fn compress(bytes: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a block back into the plain-encoded elements.
    fn decompress(bytes: &[u8]) -> Result<Vec<u8>>;
}
