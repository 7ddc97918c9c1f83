use crate::{
    Encoding, Error, Options, Persist, Result, Sink, Source, VecSink,
    archive::{read_from_slice, read_to_vec},
};

/// Writes the elements of a sequence whose `count` was already written.
///
/// With [`Encoding::Plain`] each element goes straight to the sink. A
/// compressed encoding first lays the elements out plainly in a buffer, then
/// writes one `[len: u64][block]`. Nothing is written when `count` is zero.
pub fn encode_sequence<'a, W, T, I>(sink: &mut W, count: u64, items: I) -> Result<()>
where
    W: Sink + ?Sized,
    T: Persist + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if count == 0 {
        return Ok(());
    }

    let encoding = sink.encoding();
    if encoding.is_plain() {
        for item in items {
            item.save(sink)?;
        }
        return Ok(());
    }

    let mut plain = VecSink::new(sink.options().with_encoding(Encoding::Plain));
    for item in items {
        item.save(&mut plain)?;
    }
    let block = encoding.compress(plain.as_bytes())?;
    sink.write_u64(block.len() as u64)?;
    sink.write_all(&block)
}

/// Opens the element sequence following a `count` read from `source`.
///
/// Plain sequences are read in place. A compressed block is read and
/// decompressed whole; elements are then decoded from the buffer.
pub fn open_sequence<R>(source: &mut R, count: u64) -> Result<SequenceSource<'_, R>>
where
    R: Source + ?Sized,
{
    let encoding = source.encoding();
    if count == 0 || encoding.is_plain() {
        return Ok(SequenceSource::Inline(source));
    }

    let block_len = source.read_u64()?;
    if let Some(remaining) = source.remaining()
        && block_len > remaining
    {
        return Err(Error::Truncated {
            needed: block_len,
            remaining,
        });
    }
    let block_len = usize::try_from(block_len).map_err(|_| Error::LengthOverflow(block_len))?;

    let mut block = Vec::new();
    read_to_vec(source, &mut block, block_len)?;

    Ok(SequenceSource::Block {
        bytes: encoding.decompress(&block)?,
        pos: 0,
        options: source.options().with_encoding(Encoding::Plain),
    })
}

/// Element source returned by [`open_sequence`].
#[derive(Debug)]
pub enum SequenceSource<'a, R: ?Sized> {
    Inline(&'a mut R),
    Block {
        bytes: Vec<u8>,
        pos: usize,
        options: Options,
    },
}

impl<R> SequenceSource<'_, R>
where
    R: Source + ?Sized,
{
    /// Checks that a decompressed block was consumed exactly.
    pub fn finish(self) -> Result<()> {
        match self {
            Self::Inline(_) => Ok(()),
            Self::Block { bytes, pos, .. } if pos != bytes.len() => {
                Err(Error::DecompressionMismatch {
                    expected_len: bytes.len(),
                    actual_len: pos,
                })
            }
            Self::Block { .. } => Ok(()),
        }
    }
}

impl<R> Source for SequenceSource<'_, R>
where
    R: Source + ?Sized,
{
    #[inline]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        match self {
            Self::Inline(source) => source.read_exact(buf),
            Self::Block { bytes, pos, .. } => read_from_slice(bytes, pos, buf),
        }
    }

    #[inline]
    fn options(&self) -> &Options {
        match self {
            Self::Inline(source) => source.options(),
            Self::Block { options, .. } => options,
        }
    }

    #[inline]
    fn remaining(&self) -> Option<u64> {
        match self {
            Self::Inline(source) => source.remaining(),
            Self::Block { bytes, pos, .. } => Some((bytes.len() - *pos) as u64),
        }
    }
}
