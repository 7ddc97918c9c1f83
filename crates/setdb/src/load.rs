use crate::{
    Error, Persist, Result, SetLike, Source, SequenceSource, open_sequence, reserve,
};

/// Replaces the contents of `set` with a set read from `source`.
///
/// Reads the count, clears `set`, reserves for hashed shapes, then decodes
/// each element into a default value and inserts it at the hint returned by
/// the previous insertion. Unique shapes fold duplicates silently.
///
/// Any failure is returned as is. A failure while decoding elements leaves
/// `set` holding the elements inserted before it.
pub fn load_set<'a, R, S>(source: &'a mut R, set: &mut S) -> Result<&'a mut R>
where
    R: Source + ?Sized,
    S: SetLike + ?Sized,
    S::Item: Persist + Default,
{
    let count = source.read_u64()?;
    if let Some(limit) = source.options().max_count
        && count > limit
    {
        return Err(Error::MalformedCount { count, limit });
    }
    let len = usize::try_from(count).map_err(|_| Error::LengthOverflow(count))?;

    let mut elements = open_sequence(source, count)?;
    let capacity = capacity_for::<S::Item, _>(&elements, count)?;

    set.clear();
    reserve(set, capacity)?;

    let mut hint = set.start();
    for _ in 0..len {
        let mut item = S::Item::default();
        item.load(&mut elements)?;
        hint = set.insert_hint(hint, item);
    }

    elements.finish()?;
    Ok(source)
}

/// Number of elements worth reserving for.
///
/// Bounded by what the remaining bytes can hold so a corrupted count can't
/// trigger a huge allocation. In strict mode such a count is an error.
fn capacity_for<T, R>(elements: &SequenceSource<'_, R>, count: u64) -> Result<usize>
where
    T: Persist,
    R: Source + ?Sized,
{
    let limit = match (T::MIN_ENCODED_LEN, elements.remaining()) {
        (0, _) | (_, None) => count,
        (min_len, Some(remaining)) => remaining / min_len as u64,
    };
    if count > limit && elements.options().strict_count {
        return Err(Error::MalformedCount { count, limit });
    }
    let capacity = count.min(limit);
    usize::try_from(capacity).map_err(|_| Error::LengthOverflow(capacity))
}
