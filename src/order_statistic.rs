/// A zero-based position in the sorted order of a [`SortedList`](crate::SortedList).
///
/// Used to index a list by rank; [`SortedList::get`](crate::SortedList::get) is the
/// non-panicking equivalent.
///
/// # Examples
///
/// ```
/// use sorted_avl::{Rank, SortedList};
///
/// let list = SortedList::from(["pear", "apple", "fig"]);
///
/// assert_eq!(list[Rank(0)], "apple");
/// assert_eq!(list[Rank(2)], "pear");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
