use std::{any::TypeId, collections::TryReserveError, io, result, string::FromUtf8Error};

use thiserror::Error;

use crate::{Encoding, Version};

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for setdb operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] io::Error),
    #[error(transparent)]
    Allocation(#[from] TryReserveError),
    #[error(transparent)]
    InvalidUtf8(#[from] FromUtf8Error),
    #[cfg(feature = "lz4")]
    #[error(transparent)]
    LZ4(#[from] lz4_flex::block::DecompressError),

    #[error("Truncated stream: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: u64, remaining: u64 },
    #[error("Malformed count: {count} elements, at most {limit} possible")]
    MalformedCount { count: u64, limit: u64 },
    #[error("Length {0} doesn't fit in usize")]
    LengthOverflow(u64),
    #[error("Wrong length")]
    WrongLength,
    #[error("Invalid bool byte: {0}")]
    InvalidBool(u8),
    #[error("Invalid char scalar value: {0:#x}")]
    InvalidChar(u32),
    #[error("Invalid encoding byte: {0}")]
    InvalidEncoding(u8),
    #[error("Encoding {0:?} is not enabled in this build")]
    UnsupportedEncoding(Encoding),
    #[error("Different encoding found: {found:?}, expected: {expected:?}")]
    DifferentEncoding { found: Encoding, expected: Encoding },
    #[error("Different version found: {found:?}, expected: {expected:?}")]
    DifferentVersion { found: Version, expected: Version },
    #[error("Invalid magic bytes, not a setdb archive")]
    InvalidMagic,
    #[error("Decompression mismatch: block holds {expected_len} bytes, elements used {actual_len}")]
    DecompressionMismatch {
        expected_len: usize,
        actual_len: usize,
    },
    #[error("Compressed block claims {size} bytes, at most {limit} possible")]
    BlockTooLarge { size: u64, limit: u64 },
    #[error("No binding registered for {0:?}")]
    NotRegistered(TypeId),
    #[error("Value is not a {expected}")]
    TypeMismatch { expected: &'static str },
}
