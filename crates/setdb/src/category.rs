use std::fmt;

use crate::SetLike;

/// Whether equal elements fold into one or are all kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Duplicates {
    Unique,
    Multi,
}

/// How a container arranges its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// Iteration follows a total order over elements.
    Ordered,
    /// Hash buckets, iteration order is unspecified.
    Hashed,
}

/// Structural category of a set-like container type.
///
/// Derived from the static type alone, never from contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    pub duplicates: Duplicates,
    pub layout: Layout,
}

impl Category {
    pub const ORDERED_UNIQUE: Self = Self::new(Duplicates::Unique, Layout::Ordered);
    pub const ORDERED_MULTI: Self = Self::new(Duplicates::Multi, Layout::Ordered);
    pub const HASHED_UNIQUE: Self = Self::new(Duplicates::Unique, Layout::Hashed);
    pub const HASHED_MULTI: Self = Self::new(Duplicates::Multi, Layout::Hashed);

    pub const fn new(duplicates: Duplicates, layout: Layout) -> Self {
        Self { duplicates, layout }
    }

    #[inline]
    pub const fn is_unique(&self) -> bool {
        matches!(self.duplicates, Duplicates::Unique)
    }

    #[inline]
    pub const fn is_multi(&self) -> bool {
        matches!(self.duplicates, Duplicates::Multi)
    }

    #[inline]
    pub const fn is_ordered(&self) -> bool {
        matches!(self.layout, Layout::Ordered)
    }

    #[inline]
    pub const fn is_hashed(&self) -> bool {
        matches!(self.layout, Layout::Hashed)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = if self.is_ordered() { "ordered" } else { "hashed" };
        let duplicates = if self.is_unique() { "unique" } else { "multi" };
        write!(f, "{layout}-{duplicates}")
    }
}

/// Capability tag naming one container shape.
///
/// New shapes get a new tag type; existing tags and predicates never change.
pub trait Shape {
    const CATEGORY: Category;
}

/// Sorted, equal elements fold (`BTreeSet`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedUnique;

/// Sorted, equal elements kept ([`SortedMultiSet`](crate::SortedMultiSet)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedMulti;

/// Hash buckets, equal elements fold (`HashSet`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashedUnique;

/// Hash buckets, equal elements kept ([`HashMultiSet`](crate::HashMultiSet)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashedMulti;

impl Shape for OrderedUnique {
    const CATEGORY: Category = Category::ORDERED_UNIQUE;
}

impl Shape for OrderedMulti {
    const CATEGORY: Category = Category::ORDERED_MULTI;
}

impl Shape for HashedUnique {
    const CATEGORY: Category = Category::HASHED_UNIQUE;
}

impl Shape for HashedMulti {
    const CATEGORY: Category = Category::HASHED_MULTI;
}

#[inline]
pub const fn category_of<T: SetLike + ?Sized>() -> Category {
    <T::Shape as Shape>::CATEGORY
}

#[inline]
pub const fn is_ordered_unique<T: SetLike + ?Sized>() -> bool {
    let category = category_of::<T>();
    category.is_ordered() && category.is_unique()
}

#[inline]
pub const fn is_ordered_multi<T: SetLike + ?Sized>() -> bool {
    let category = category_of::<T>();
    category.is_ordered() && category.is_multi()
}

#[inline]
pub const fn is_hashed_unique<T: SetLike + ?Sized>() -> bool {
    let category = category_of::<T>();
    category.is_hashed() && category.is_unique()
}

#[inline]
pub const fn is_hashed_multi<T: SetLike + ?Sized>() -> bool {
    let category = category_of::<T>();
    category.is_hashed() && category.is_multi()
}

#[inline]
pub const fn is_any_hashed<T: SetLike + ?Sized>() -> bool {
    is_hashed_unique::<T>() || is_hashed_multi::<T>()
}

#[inline]
pub const fn is_any_set_like<T: SetLike + ?Sized>() -> bool {
    is_ordered_unique::<T>()
        || is_ordered_multi::<T>()
        || is_hashed_unique::<T>()
        || is_hashed_multi::<T>()
}
