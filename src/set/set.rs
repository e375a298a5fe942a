use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use derive_more::{AsRef, From, Into};

use super::Iter;

/// A set of unique values, stored as the keys of a presence map (a [`HashMap`] from each item to
/// `()`).
///
/// Hashing, collision handling and growth are all left to the underlying [`HashMap`]. The order of
/// iteration (and of [`to_array`](Set::to_array)) is unspecified and may differ between two sets
/// holding the same items.
///
/// It is a logic error for an item to be modified in a way that changes its hash or equality while
/// it is in the set.
///
/// # Items that aren't equal to themselves
/// Lookups rely on [`Eq`] being reflexive. If a type's equality isn't (for example a float
/// wrapper that compares with IEEE semantics, holding NaN), such an item can be inserted but is
/// never found again: [`has`](Set::has) returns false, [`remove`](Set::remove) does nothing, and
/// every insertion stores another copy. Avoiding these values is up to the caller.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Set.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` / `len` | `O(1)` |
/// | `has` | `O(1)`* |
/// | `insert` | `O(1)`*, `O(n)`** |
/// | `remove` | `O(1)`* |
/// | `to_array` | `O(n)` |
///
/// \* Expected time, as with any hash-based lookup.
///
/// \** When the underlying map has to grow.
#[derive(Clone, AsRef, From, Into)]
pub struct Set<T, S = RandomState> {
    pub(crate) inner: HashMap<T, (), S>,
}

impl<T> Set<T, RandomState> {
    /// Creates a new, empty Set. No memory is allocated until the first insertion.
    ///
    /// # Examples
    /// ```
    /// # use getset::Set;
    /// let set: Set<&str> = Set::new();
    /// assert_eq!(set.size(), 0);
    /// ```
    pub fn new() -> Set<T, RandomState> {
        Set {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty Set with room for at least `cap` items before reallocating.
    pub fn with_cap(cap: usize) -> Set<T, RandomState> {
        Set {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq> Set<T, RandomState> {
    /// Creates a new Set containing `items`, inserted in order. Duplicates collapse into a single
    /// item.
    ///
    /// # Examples
    /// ```
    /// # use getset::Set;
    /// let set = Set::from_items(["a", "b", "b", "c"]);
    /// assert_eq!(set.size(), 3);
    /// assert!(set.has("a"));
    /// assert!(!set.has("d"));
    /// ```
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Set<T, RandomState> {
        items.into_iter().collect()
    }
}

impl<T, S> Set<T, S> {
    /// Creates a new, empty Set which will use `hasher` to hash its items.
    pub const fn with_hasher(hasher: S) -> Set<T, S> {
        Set {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new, empty Set with room for at least `cap` items, using `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: S) -> Set<T, S> {
        Set {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of items in the Set.
    ///
    /// # Examples
    /// ```
    /// # use getset::set;
    /// assert_eq!(set![-1, 0, 1, 3, 5].size(), 5);
    /// assert_eq!(set![true, true].size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Returns the number of items in the Set. Identical to [`size`](Set::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns true if the Set contains no items.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of items the Set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the Set's hasher.
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Removes every item, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns a borrowed iterator over the items of the Set, in no particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a snapshot of every item in the Set, cloned into an array. The array's length is
    /// [`size`](Set::size) and its order is unspecified.
    ///
    /// # Examples
    /// ```
    /// # use getset::set;
    /// let set = set![1, 3, 5];
    /// let mut arr = set.to_array();
    /// arr.sort();
    /// assert_eq!(*arr, [1, 3, 5]);
    /// ```
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the Set, moving every item into an array in an unspecified order.
    pub fn into_array(self) -> Box<[T]> {
        self.into_iter().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Inserts `item` into the Set, returning true if it wasn't already present. If an equal item
    /// is already stored, the Set is left unchanged (and keeps the original item).
    ///
    /// # Examples
    /// ```
    /// # use getset::set;
    /// let mut set = set![1, 3];
    /// assert!(!set.has(&2));
    ///
    /// set.insert(2);
    /// assert!(set.has(&2));
    /// assert_eq!(set.size(), 3);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Returns true if the Set contains an item equal to `item`.
    ///
    /// Any borrowed form of `T` can be used for the lookup, as long as its [`Hash`] and [`Eq`]
    /// agree with those of `T`.
    pub fn has<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns a reference to the stored item equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(item).map(|(stored, _)| stored)
    }

    /// Removes the item equal to `item` from the Set, returning true if there was one. Removing an
    /// item that isn't present does nothing.
    ///
    /// # Examples
    /// ```
    /// # use getset::set;
    /// let mut set = set!["a", "ab", "abc", "abcd"];
    /// assert!(set.remove("a"));
    /// assert!(!set.remove("A"));
    /// assert_eq!(set.size(), 3);
    /// ```
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes the item equal to `item` from the Set and returns it, if there was one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(stored, ())| stored)
    }

    /// Reserves room for at least `extra` more items.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }
}

impl<T, S: Default> Default for Set<T, S> {
    fn default() -> Self {
        Set {
            inner: HashMap::default(),
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T, RandomState> {
    fn from(value: [T; N]) -> Self {
        Set::from_iter(value)
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = Set::with_cap_and_hasher(iter.size_hint().0, S::default());

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().all(|item| other.has(item))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: Debug, S> Debug for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Display, S> Display for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
