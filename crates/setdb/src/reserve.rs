use crate::{Result, SetLike, is_any_hashed};

/// Pre-sizes `set` for `expected` incoming elements.
///
/// Hashed shapes reserve bucket capacity in one call. Ordered shapes are left
/// alone: their storage does not benefit from bulk pre-allocation, and their
/// reservation is never invoked.
#[inline]
pub fn reserve<S: SetLike + ?Sized>(set: &mut S, expected: usize) -> Result<()> {
    if is_any_hashed::<S>() {
        set.try_reserve(expected)?;
    }
    Ok(())
}
