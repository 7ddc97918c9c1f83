use std::{
    collections::{HashMap, TryReserveError, hash_map::RandomState},
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
    iter,
    num::NonZeroUsize,
};

use crate::{HashedMulti, SetLike};

/// Hashed multiset storing one entry per distinct element with its count.
///
/// Iteration yields every occurrence, equal elements adjacent, buckets in an
/// unspecified order.
#[derive(Clone)]
pub struct HashMultiSet<T, S = RandomState> {
    counts: HashMap<T, NonZeroUsize, S>,
    len: usize,
}

impl<T> HashMultiSet<T> {
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<T, S> HashMultiSet<T, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            counts: HashMap::with_hasher(hasher),
            len: 0,
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            counts: HashMap::with_capacity_and_hasher(capacity, hasher),
            len: 0,
        }
    }

    /// Total number of elements, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct elements.
    #[inline]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.counts.capacity()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.counts
            .iter()
            .flat_map(|(item, count)| iter::repeat_n(item, count.get()))
    }
}

impl<T, S> HashMultiSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    pub fn insert(&mut self, item: T) {
        self.counts
            .entry(item)
            .and_modify(|count| *count = count.saturating_add(1))
            .or_insert(NonZeroUsize::MIN);
        self.len += 1;
    }

    /// Number of elements equal to `item`.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).map_or(0, |count| count.get())
    }

    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Removes one element equal to `item`, returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(count) = self.counts.get_mut(item) else {
            return false;
        };
        match NonZeroUsize::new(count.get() - 1) {
            Some(lower) => *count = lower,
            None => {
                self.counts.remove(item);
            }
        }
        self.len -= 1;
        true
    }

    /// Reserves room for at least `additional` more distinct elements.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.counts.try_reserve(additional)
    }
}

impl<T, S: Default> Default for HashMultiSet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> PartialEq for HashMultiSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T, S> Eq for HashMultiSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T: Debug, S> Debug for HashMultiSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> SetLike for HashMultiSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;
    type Shape = HashedMulti;
    type Hint = ();

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn clear(&mut self) {
        HashMultiSet::clear(self)
    }

    #[inline]
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        HashMultiSet::try_reserve(self, additional)
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

impl<T, S> FromIterator<T> for HashMultiSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for HashMultiSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
