use lz4_flex::{block::decompress, compress_prepend_size};

use crate::{Error, Result};

use super::CompressionStrategy;

/// Most bytes one compressed LZ4 byte can expand to: a match length is
/// extended by up to 255 per extra byte.
const LZ4_MAX_RATIO: u64 = 255;

/// Slack for the fixed-size token and offset of the smallest match.
const LZ4_RATIO_SLACK: u64 = 64;

/// LZ4 compression strategy for fast compression/decompression.
#[derive(Debug, Clone, Copy)]
pub struct LZ4Strategy;

impl CompressionStrategy for LZ4Strategy {
    fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(compress_prepend_size(bytes))
    }

    /// Expects the size-prepended layout written by [`LZ4Strategy::compress`].
    ///
    /// The prepended size is checked against what the block could possibly
    /// expand to before anything is allocated.
    fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
        let (size, block) = bytes.split_first_chunk::<4>().ok_or(Error::WrongLength)?;
        let size = u64::from(u32::from_le_bytes(*size));

        let limit = (block.len() as u64)
            .saturating_mul(LZ4_MAX_RATIO)
            .saturating_add(LZ4_RATIO_SLACK);
        if size > limit {
            return Err(Error::BlockTooLarge { size, limit });
        }
        let size = usize::try_from(size).map_err(|_| Error::LengthOverflow(size))?;

        Ok(decompress(block, size)?)
    }
}
