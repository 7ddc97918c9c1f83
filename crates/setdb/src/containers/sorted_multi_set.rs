use std::{
    fmt::{self, Debug},
    slice, vec,
};

use crate::{OrderedMulti, SetLike};

/// Ordered multiset stored as a sorted vector.
///
/// Equal elements sit next to each other. Appending in
/// sorted order is amortized O(1) through [`SetLike::insert_hint`], which is
/// how a load rebuilds it from its own saved order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortedMultiSet<T> {
    items: Vec<T>,
}

impl<T> SortedMultiSet<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T: Ord> SortedMultiSet<T> {
    /// Inserts `item` after every element equal to it.
    pub fn insert(&mut self, item: T) {
        let at = self.upper_bound(&item);
        self.items.insert(at, item);
    }

    /// Number of elements equal to `item`.
    pub fn count(&self, item: &T) -> usize {
        self.upper_bound(item) - self.lower_bound(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Removes one element equal to `item`, returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.binary_search(item) {
            Ok(index) => {
                self.items.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    fn lower_bound(&self, item: &T) -> usize {
        self.items.partition_point(|x| x < item)
    }

    #[inline]
    fn upper_bound(&self, item: &T) -> usize {
        self.items.partition_point(|x| x <= item)
    }
}

impl<T> Default for SortedMultiSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SortedMultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Ord> SetLike for SortedMultiSet<T> {
    type Item = T;
    type Shape = OrderedMulti;
    /// Index just past the last inserted element.
    type Hint = usize;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.items.clear()
    }

    #[inline]
    fn start(&self) -> Self::Hint {
        0
    }

    fn insert_hint(&mut self, hint: Self::Hint, item: T) -> Self::Hint {
        let hint = hint.min(self.items.len());
        let fits_after = hint == 0 || self.items[hint - 1] <= item;
        let fits_before = hint == self.items.len() || item <= self.items[hint];
        let at = if fits_after && fits_before {
            hint
        } else {
            self.upper_bound(&item)
        };
        self.items.insert(at, item);
        at + 1
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Ord> FromIterator<T> for SortedMultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort();
        Self { items }
    }
}

impl<T: Ord> Extend<T> for SortedMultiSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut hint = self.items.len();
        for item in iter {
            hint = self.insert_hint(hint, item);
        }
    }
}

impl<T> IntoIterator for SortedMultiSet<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedMultiSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
