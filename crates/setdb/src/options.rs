use crate::{Encoding, Version};

/// Options carried by every archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Bulk encoding applied to element sequences.
    pub encoding: Encoding,
    /// Payload version written to and checked against archive headers.
    pub version: Version,
    /// Largest element count a load accepts (`None` for no limit).
    pub max_count: Option<u64>,
    /// Reject a count the remaining stream cannot hold before touching the
    /// target container, instead of failing on the first truncated element.
    pub strict_count: bool,
}

impl Options {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            version: Version::ONE,
            max_count: None,
            strict_count: false,
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_max_count(mut self, max_count: u64) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn with_strict_count(mut self, strict: bool) -> Self {
        self.strict_count = strict;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(Encoding::Plain)
    }
}

impl From<Encoding> for Options {
    fn from(encoding: Encoding) -> Self {
        Self::new(encoding)
    }
}
