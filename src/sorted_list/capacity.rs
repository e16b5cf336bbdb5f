use super::SortedList;
use crate::augment::Augment;
use crate::compare::Natural;
use crate::raw::RawOSTree;

impl<T: Ord> SortedList<T> {
    /// Creates an empty list with room for at least `capacity` values before the node arena
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let list: SortedList<i32> = SortedList::with_capacity(16);
    /// assert!(list.is_empty());
    /// assert!(list.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SortedList {
            tree: RawOSTree::with_capacity(capacity, Natural, ()),
        }
    }
}

impl<T, C, A: Augment<T>> SortedList<T, C, A> {
    /// Returns the number of values the list can hold before the node arena reallocates.
    ///
    /// Slots freed by removals are reused, so a list that shrinks and grows again within its
    /// capacity does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::SortedList;
    ///
    /// let mut list: SortedList<i32> = SortedList::with_capacity(32);
    /// list.extend(0..32);
    /// list.clear();
    /// assert!(list.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
}
