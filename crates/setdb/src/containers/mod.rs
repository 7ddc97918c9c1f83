use std::{
    collections::{BTreeSet, HashSet, TryReserveError},
    hash::{BuildHasher, Hash},
};

use crate::{HashedUnique, OrderedUnique, SetLike};

mod hash_multi_set;
mod sorted_multi_set;

pub use hash_multi_set::*;
pub use sorted_multi_set::*;

// `BTreeSet` has no stable positional insert, so the hint is a unit and each
// insert pays its own O(log n) descent.
impl<T: Ord> SetLike for BTreeSet<T> {
    type Item = T;
    type Shape = OrderedUnique;
    type Hint = ();

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        BTreeSet::clear(self)
    }

    #[inline]
    fn start(&self) -> Self::Hint {}

    #[inline]
    fn insert_hint(&mut self, _: Self::Hint, item: T) -> Self::Hint {
        self.insert(item);
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> SetLike for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;
    type Shape = HashedUnique;
    type Hint = ();

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        HashSet::clear(self)
    }

    #[inline]
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        HashSet::try_reserve(self, additional)
    }

    #[inline]
    fn start(&self) -> Self::Hint {}

    #[inline]
    fn insert_hint(&mut self, _: Self::Hint, item: T) -> Self::Hint {
        self.insert(item);
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}
