use log::debug;

use crate::{Bytes, Encoding, Error, Options, Result, Sink, Source, Version};

const MAGIC: [u8; 4] = *b"SETD";
const HEADER_VERSION: Version = Version::ONE;
pub const HEADER_SIZE: usize = 16;

/// Fixed 16-byte prelude of file archives.
///
/// `[magic: 4][header version: u32][payload version: u32][encoding: u8][padding: 3]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    header_version: Version,
    version: Version,
    encoding: Encoding,
}

impl Header {
    pub fn new(options: &Options) -> Self {
        Self {
            header_version: HEADER_VERSION,
            version: options.version,
            encoding: options.encoding,
        }
    }

    #[inline(always)]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline(always)]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn write<W: Sink + ?Sized>(&self, sink: &mut W) -> Result<()> {
        debug!(
            "writing header: version {:?}, encoding {:?}",
            self.version, self.encoding
        );
        sink.write_all(&self.to_bytes())
    }

    pub fn read<R: Source + ?Sized>(source: &mut R) -> Result<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        source.read_exact(&mut buf)?;
        Self::from_bytes(&buf)
    }

    /// Reads a header and checks it against the source's own options.
    pub fn read_and_verify<R: Source + ?Sized>(source: &mut R) -> Result<Self> {
        let header = Self::read(source)?;
        header.verify(source.options())?;
        Ok(header)
    }

    pub fn verify(&self, options: &Options) -> Result<()> {
        if self.header_version != HEADER_VERSION {
            return Err(Error::DifferentVersion {
                found: self.header_version,
                expected: HEADER_VERSION,
            });
        }
        if self.version != options.version {
            return Err(Error::DifferentVersion {
                found: self.version,
                expected: options.version,
            });
        }
        if self.encoding != options.encoding {
            return Err(Error::DifferentEncoding {
                found: self.encoding,
                expected: options.encoding,
            });
        }
        debug!(
            "header verified: version {:?}, encoding {:?}",
            self.version, self.encoding
        );
        Ok(())
    }

    fn to_bytes(self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&MAGIC);
        bytes[4..8].copy_from_slice(&self.header_version.to_bytes());
        bytes[8..12].copy_from_slice(&self.version.to_bytes());
        bytes[12..13].copy_from_slice(&self.encoding.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::WrongLength);
        }
        if bytes[0..4] != MAGIC {
            return Err(Error::InvalidMagic);
        }
        Ok(Self {
            header_version: Version::from_bytes(&bytes[4..8])?,
            version: Version::from_bytes(&bytes[8..12])?,
            encoding: Encoding::from_bytes(&bytes[12..13])?,
        })
    }
}
