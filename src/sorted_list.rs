use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;
use log::debug;

use crate::augment::Augment;
use crate::compare::{Compare, Natural};
use crate::error::Error;
use crate::raw::{Handle, RawOSTree, Side};

mod builder;
mod capacity;
mod cursor;
mod order_statistic;

pub use builder::Builder;
pub use cursor::Cursor;

/// A sorted list backed by a size-augmented AVL tree.
///
/// Values are kept in ascending order of the list's comparator at all times, and duplicates are
/// allowed. A run of equal values keeps insertion order; lookups that resolve a single value
/// ([`contains`], [`rank_of`], [`remove`]) operate on the leftmost (oldest) member of the run.
///
/// Insertion, removal, [`get`] by rank, [`rank_of`] and the neighbour queries [`lower`] and
/// [`higher`] all take O(log n) time.
///
/// Iterators returned by [`SortedList::iter`] borrow the list, so the borrow checker rules out
/// mutation while they are alive. A [`Cursor`] borrows nothing between steps and instead reports
/// [`Error::ConcurrentModification`] once the list has been structurally modified.
///
/// It is a logic error for a value to be modified in such a way that its ordering relative to
/// any other value changes while it is in the list. The behavior resulting from such a logic error
/// is not specified, but will be encapsulated to the `SortedList` that observed the logic error and
/// not result in undefined behavior.
///
/// [`contains`]: SortedList::contains
/// [`rank_of`]: SortedList::rank_of
/// [`remove`]: SortedList::remove
/// [`get`]: SortedList::get
/// [`lower`]: SortedList::lower
/// [`higher`]: SortedList::higher
///
/// # Examples
///
/// ```
/// use sorted_avl::SortedList;
///
/// let mut list = SortedList::new();
/// for value in [9, 5, 1, 7, 3] {
///     list.insert(value);
/// }
///
/// assert_eq!(list.get(0), Ok(&1));
/// assert_eq!(list.rank_of(&7), Ok(3));
/// assert_eq!(list.lower(&5), Ok(&3));
/// assert!(list.lower(&1).is_err());
///
/// list.remove(&5);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 7, 9]);
/// ```
pub struct SortedList<T, C = Natural, A: Augment<T> = ()> {
    tree: RawOSTree<T, C, A>,
}

/// An iterator over the values of a `SortedList` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`SortedList`].
///
/// # Examples
///
/// ```
/// use sorted_avl::SortedList;
///
/// let list = SortedList::from([3, 1, 2]);
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: SortedList::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T, C, A: Augment<T>> {
    tree: &'a RawOSTree<T, C, A>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the values of a `SortedList` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`SortedList`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: SortedList#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T: Ord> SortedList<T> {
    /// Makes a new, empty `SortedList` ordered by `T`'s [`Ord`] implementation.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list: SortedList<i32> = SortedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        SortedList {
            tree: RawOSTree::new(Natural, ()),
        }
    }
}

impl<T> SortedList<T> {
    /// Starts configuring a `SortedList` with a custom comparator, augmentation or capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::{SortedList, Sum};
    ///
    /// let mut list = SortedList::builder()
    ///     .comparator(|a: &i64, b: &i64| b.cmp(a))
    ///     .augment(Sum)
    ///     .capacity(64)
    ///     .build();
    /// list.extend([2, 9, 4]);
    ///
    /// assert_eq!(list.get(0), Ok(&9));
    /// assert_eq!(list.summary(), Some(&15));
    /// assert!(list.capacity() >= 64);
    /// ```
    #[must_use]
    pub fn builder() -> Builder<T> {
        Builder::new()
    }
}

impl<T, C> SortedList<T, C> {
    /// Makes a new, empty `SortedList` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut words: SortedList<&str, _> = SortedList::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// words.extend(["pear", "fig", "banana"]);
    /// assert_eq!(words.to_vec(), ["fig", "pear", "banana"]);
    /// ```
    #[must_use]
    pub const fn with_comparator(compare: C) -> Self {
        SortedList {
            tree: RawOSTree::new(compare, ()),
        }
    }
}

impl<T, C, A: Augment<T>> SortedList<T, C, A> {
    /// Returns the number of values in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert_eq!(list.len(), 0);
    /// list.insert(1);
    /// list.insert(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the list contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of levels in the underlying tree, or 0 if the list is empty.
    ///
    /// The tree is height-balanced, so this never exceeds about `1.44 * log2(len + 2)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let list: SortedList<u32> = (0..1000).collect();
    /// assert!(list.height() <= 14);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the augmentation summary of the whole list, or `None` if the list is empty.
    ///
    /// See [`Augment`] for how summaries are maintained.
    #[must_use]
    pub fn summary(&self) -> Option<&A::Summary> {
        self.tree.summary()
    }

    /// Returns a reference to the list's comparator.
    #[must_use]
    pub fn comparator(&self) -> &C {
        self.tree.compare()
    }

    /// Clears the list, removing all values.
    ///
    /// Any outstanding [`Cursor`] is invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list = SortedList::from([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the smallest value in the list, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let list = SortedList::from([4, 2, 8]);
    /// assert_eq!(list.first(), Some(&2));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first(Side::Left).map(|h| self.tree.value(h))
    }

    /// Returns the largest value in the list, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.first(Side::Right).map(|h| self.tree.value(h))
    }

    /// Removes and returns the smallest value in the list, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list = SortedList::from([4, 2, 8]);
    /// assert_eq!(list.pop_first(), Some(2));
    /// assert_eq!(list.pop_first(), Some(4));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        let handle = self.tree.first(Side::Left)?;
        Some(self.tree.remove_node(handle))
    }

    /// Removes and returns the largest value in the list, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        let handle = self.tree.first(Side::Right)?;
        Some(self.tree.remove_node(handle))
    }

    /// Gets an iterator that visits the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let list = SortedList::from([3, 1, 3, 2]);
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, C, A> {
        Iter {
            tree: &self.tree,
            front: self.tree.first(Side::Left),
            back: self.tree.first(Side::Right),
            remaining: self.tree.len(),
        }
    }

    /// Returns the values in ascending order as a vector of clones.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let list = SortedList::from(["b", "c", "a"]);
    /// assert_eq!(list.to_vec(), ["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list, returning its values in ascending order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.tree.into_vec()
    }
}

impl<T, C: Compare<T>, A: Augment<T>> SortedList<T, C, A> {
    /// Inserts `value` at its sorted position.
    ///
    /// A value equal to values already in the list is placed after all of them.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.insert(2);
    /// list.insert(1);
    /// list.insert(2);
    /// assert_eq!(list.to_vec(), [1, 2, 2]);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.tree.insert(value);
    }

    /// Adds a value, accepting either a `T` or an `Option<T>`.
    ///
    /// Returns `false` and leaves the list unchanged when given `None`, and `true` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list: SortedList<i32> = SortedList::new();
    /// assert!(list.add(3));
    /// assert!(list.add(Some(1)));
    /// assert!(!list.add(None));
    /// assert_eq!(list.to_vec(), [1, 3]);
    /// ```
    pub fn add<V: Into<Option<T>>>(&mut self, value: V) -> bool {
        self.try_add(value.into()).is_ok()
    }

    /// Adds `value` if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingValue`] without modifying the list if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::{Error, SortedList};
    ///
    /// let mut list: SortedList<i32> = SortedList::new();
    /// assert_eq!(list.try_add(Some(5)), Ok(()));
    /// assert_eq!(list.try_add(None), Err(Error::MissingValue));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn try_add(&mut self, value: Option<T>) -> Result<(), Error> {
        let Some(value) = value else {
            debug!("rejected a missing value");
            return Err(Error::MissingValue);
        };
        self.tree.insert(value);
        Ok(())
    }

    /// Returns `true` if the list contains a value equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let list = SortedList::from([1, 2, 3]);
    /// assert!(list.contains(&1));
    /// assert!(!list.contains(&4));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.tree.lower_bound(value).is_some()
    }

    /// Removes the leftmost value equal to `value`. Returns whether such a value was present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list = SortedList::from([1, 1, 2]);
    /// assert!(list.remove(&1));
    /// assert_eq!(list.to_vec(), [1, 2]);
    /// assert!(!list.remove(&5));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the leftmost value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list = SortedList::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    /// list.extend([(1, 'x'), (1, 'y')]);
    /// assert_eq!(list.take(&(1, '?')), Some((1, 'x')));
    /// assert_eq!(list.take(&(2, '?')), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value)
    }
}

impl<T, C, A> Clone for SortedList<T, C, A>
where
    T: Clone,
    C: Clone,
    A: Augment<T> + Clone,
    A::Summary: Clone,
{
    fn clone(&self) -> Self {
        SortedList {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug, C, A: Augment<T>> fmt::Debug for SortedList<T, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C: Default, A: Augment<T> + Default> Default for SortedList<T, C, A> {
    /// Creates an empty `SortedList`.
    fn default() -> Self {
        SortedList {
            tree: RawOSTree::new(C::default(), A::default()),
        }
    }
}

impl<T, C, A, C2, A2> PartialEq<SortedList<T, C2, A2>> for SortedList<T, C, A>
where
    T: PartialEq,
    A: Augment<T>,
    A2: Augment<T>,
{
    /// Lists are equal when they hold equal values in the same order.
    fn eq(&self, other: &SortedList<T, C2, A2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C, A: Augment<T>> Eq for SortedList<T, C, A> {}

impl<T, C: Compare<T>, A: Augment<T>> Extend<T> for SortedList<T, C, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>, A: Augment<T>> Extend<&'a T> for SortedList<T, C, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T, C, A> FromIterator<T> for SortedList<T, C, A>
where
    C: Compare<T> + Default,
    A: Augment<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SortedList::default();
        list.extend(iter);
        list
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedList<T> {
    /// Converts a `[T; N]` into a `SortedList<T>`.
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let list1 = SortedList::from([1, 2, 3, 4]);
    /// let list2: SortedList<_> = [4, 3, 2, 1].into();
    /// assert_eq!(list1, list2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        let mut list = SortedList::with_capacity(N);
        list.extend(arr);
        list
    }
}

impl<'a, T, C, A: Augment<T>> IntoIterator for &'a SortedList<T, C, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C, A>;

    fn into_iter(self) -> Iter<'a, T, C, A> {
        self.iter()
    }
}

impl<T, C, A: Augment<T>> IntoIterator for SortedList<T, C, A> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `SortedList`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let list = SortedList::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = list.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T, C, A: Augment<T>> Iterator for Iter<'a, T, C, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.tree.step(handle, Side::Right);
        Some(self.tree.value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T, C, A: Augment<T>> DoubleEndedIterator for Iter<'a, T, C, A> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.tree.step(handle, Side::Left);
        Some(self.tree.value(handle))
    }
}

impl<T, C, A: Augment<T>> ExactSizeIterator for Iter<'_, T, C, A> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T, C, A: Augment<T>> FusedIterator for Iter<'_, T, C, A> {}

impl<T, C, A: Augment<T>> Clone for Iter<'_, T, C, A> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug, C, A: Augment<T>> fmt::Debug for Iter<'_, T, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `sorted_list::IntoIter`.
    ///
    /// ```
    /// # use sorted_avl::sorted_list;
    /// let iter: sorted_list::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}
