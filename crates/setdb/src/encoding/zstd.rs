use ::zstd::{decode_all, encode_all};

use crate::Result;

use super::CompressionStrategy;

/// Zstd compression level (1-22). Level 3 provides a good balance
/// between compression ratio and speed for most workloads.
const ZSTD_COMPRESSION_LEVEL: i32 = 3;

/// Zstd compression strategy for high compression ratios.
#[derive(Debug, Clone, Copy)]
pub struct ZstdStrategy;

impl CompressionStrategy for ZstdStrategy {
    fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(encode_all(bytes, ZSTD_COMPRESSION_LEVEL)?)
    }

    fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(decode_all(bytes)?)
    }
}
