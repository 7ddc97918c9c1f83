use crate::{Persist, Result, SetLike, Sink, encode_sequence};

/// Writes `set` as `[count: u64][elements]` and returns the sink.
///
/// Elements are written in the set's iteration order through
/// [`encode_sequence`], so the sink's encoding decides their layout.
pub fn save_set<'a, W, S>(sink: &'a mut W, set: &S) -> Result<&'a mut W>
where
    W: Sink + ?Sized,
    S: SetLike + ?Sized,
    S::Item: Persist,
{
    let count = set.len() as u64;
    sink.write_u64(count)?;
    encode_sequence(sink, count, set.items())?;
    Ok(sink)
}
