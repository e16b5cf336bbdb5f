use core::ops::Index;

use super::SortedList;
use crate::augment::Augment;
use crate::compare::Compare;
use crate::error::Error;
use crate::Rank;

impl<T, C, A: Augment<T>> SortedList<T, C, A> {
    /// Returns the value at zero-based position `rank` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RankOutOfBounds`] if `rank >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::{Error, SortedList};
    ///
    /// let list = SortedList::from([30, 10, 20]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(3), Err(Error::RankOutOfBounds { rank: 3, len: 3 }));
    /// ```
    pub fn get(&self, rank: usize) -> Result<&T, Error> {
        self.tree
            .select(rank)
            .map(|handle| self.tree.value(handle))
            .ok_or(Error::RankOutOfBounds {
                rank,
                len: self.len(),
            })
    }
}

impl<T, C: Compare<T>, A: Augment<T>> SortedList<T, C, A> {
    /// Returns the zero-based rank of `value` in sorted order.
    ///
    /// When the list holds several values equal to `value`, the rank of the first of them is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no value equal to `value` is present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::{Error, SortedList};
    ///
    /// let list = SortedList::from([5, 1, 5, 3]);
    /// assert_eq!(list.rank_of(&1), Ok(0));
    /// assert_eq!(list.rank_of(&5), Ok(2));
    /// assert_eq!(list.rank_of(&4), Err(Error::NotFound));
    /// ```
    pub fn rank_of(&self, value: &T) -> Result<usize, Error> {
        self.tree.lower_bound(value).map(|(_, rank)| rank).ok_or(Error::NotFound)
    }

    /// Returns the largest value strictly less than `value`: its in-order predecessor.
    ///
    /// `value` itself does not need to be in the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPredecessor`] if every value in the list is greater than or equal to
    /// `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::{Error, SortedList};
    ///
    /// let list = SortedList::from([9, 5, 1, 7, 3]);
    /// assert_eq!(list.lower(&7), Ok(&5));
    /// assert_eq!(list.lower(&6), Ok(&5));
    /// assert_eq!(list.lower(&1), Err(Error::NoPredecessor));
    /// ```
    pub fn lower(&self, value: &T) -> Result<&T, Error> {
        self.tree.lower(value).map(|handle| self.tree.value(handle)).ok_or(Error::NoPredecessor)
    }

    /// Returns the smallest value strictly greater than `value`: its in-order successor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuccessor`] if every value in the list is less than or equal to
    /// `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::{Error, SortedList};
    ///
    /// let list = SortedList::from([1, 3, 3, 5]);
    /// assert_eq!(list.higher(&3), Ok(&5));
    /// assert_eq!(list.higher(&0), Ok(&1));
    /// assert_eq!(list.higher(&5), Err(Error::NoSuccessor));
    /// ```
    pub fn higher(&self, value: &T) -> Result<&T, Error> {
        self.tree.higher(value).map(|handle| self.tree.value(handle)).ok_or(Error::NoSuccessor)
    }
}

/// Indexes into the list by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use sorted_avl::{Rank, SortedList};
///
/// let list = SortedList::from([10, 30, 20]);
/// assert_eq!(list[Rank(1)], 20);
/// ```
impl<T, C, A: Augment<T>> Index<Rank> for SortedList<T, C, A> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        match self.get(rank.0) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn ranks_of_distinct_values_round_trip() {
        let list: SortedList<i32> = (0..200).map(|i| (i * 37) % 200).collect();
        for rank in 0..200 {
            let value = list.get(rank).unwrap();
            assert_eq!(list.rank_of(value), Ok(rank));
        }
    }

    #[test]
    fn queries_on_empty_list() {
        let list: SortedList<i32> = SortedList::new();
        assert_eq!(list.get(0), Err(Error::RankOutOfBounds { rank: 0, len: 0 }));
        assert_eq!(list.rank_of(&0), Err(Error::NotFound));
        assert_eq!(list.lower(&0).map_err(|e| e.kind()), Err(ErrorKind::NotFound));
        assert_eq!(list.higher(&0), Err(Error::NoSuccessor));
    }

    #[test]
    #[should_panic(expected = "rank 2 is out of bounds for a list of length 2")]
    fn index_out_of_bounds_panics() {
        let list = SortedList::from([1, 2]);
        let _ = list[Rank(2)];
    }
}
