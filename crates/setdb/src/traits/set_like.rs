use std::collections::TryReserveError;

use crate::Shape;

/// A set-like associative container: unique or multi, ordered or hashed.
///
/// Implementing this trait is the whole registration story for a container
/// type. Its [`Shape`] tag classifies it, and the blanket
/// [`Persist`](crate::Persist) binding gives it the save and load protocols.
pub trait SetLike {
    type Item;

    /// Category tag, one of [`OrderedUnique`](crate::OrderedUnique),
    /// [`OrderedMulti`](crate::OrderedMulti), [`HashedUnique`](crate::HashedUnique)
    /// or [`HashedMulti`](crate::HashedMulti).
    type Shape: Shape;

    /// Cursor to the last successful insertion, threaded through a load.
    type Hint: Copy;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Reserves room for at least `additional` more elements.
    ///
    /// Only called for hashed shapes. The default does nothing.
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let _ = additional;
        Ok(())
    }

    /// Hint positioned at the logical start of the container.
    fn start(&self) -> Self::Hint;

    /// Inserts `item` near `hint` and returns the hint for the next insertion.
    ///
    /// Unique shapes fold an item equal to an existing one, multi shapes keep
    /// every item. The hint affects cost only, never the resulting contents.
    fn insert_hint(&mut self, hint: Self::Hint, item: Self::Item) -> Self::Hint;

    /// Elements in the container's own iteration order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}
