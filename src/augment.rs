use core::ops::Add;

/// Additional per-node data maintained alongside the cached height and subtree size.
///
/// Every insertion, removal and rotation recomputes [`summarize`](Augment::summarize) for the
/// nodes it touches, bottom-up, in the same pass that updates heights and sizes. A summary may
/// therefore only depend on the node's own value and its children's summaries.
///
/// The summary of the whole list is available through
/// [`SortedList::summary`](crate::SortedList::summary).
///
/// # Examples
///
/// ```
/// use sorted_avl::{Augment, SortedList};
///
/// /// Tracks the longest string in each subtree.
/// struct Longest;
///
/// impl Augment<String> for Longest {
///     type Summary = usize;
///
///     fn summarize(&self, value: &String, left: Option<&usize>, right: Option<&usize>) -> usize {
///         value.len().max(*left.unwrap_or(&0)).max(*right.unwrap_or(&0))
///     }
/// }
///
/// let mut list: SortedList<String, _, _> = SortedList::builder().augment(Longest).build();
/// list.extend(["fig".to_string(), "banana".to_string(), "kiwi".to_string()]);
/// assert_eq!(list.summary(), Some(&6));
/// ```
pub trait Augment<T> {
    /// The cached value stored in every node.
    type Summary;

    /// Computes a node's summary from its value and the summaries of its children.
    fn summarize(&self, value: &T, left: Option<&Self::Summary>, right: Option<&Self::Summary>) -> Self::Summary;
}

/// No augmentation.
impl<T> Augment<T> for () {
    type Summary = ();

    #[inline]
    fn summarize(&self, _: &T, _: Option<&()>, _: Option<&()>) {}
}

/// Maintains the sum of every value in each subtree.
///
/// # Panics
///
/// Subtree totals are computed with `T`'s [`Add`], so with primitive integers an insertion
/// panics in debug builds when a total overflows `T`, as [`Iterator::sum`] does. Pick a `T` wide
/// enough for the sum of the whole list.
///
/// # Examples
///
/// ```
/// use sorted_avl::{SortedList, Sum};
///
/// let mut list: SortedList<i32, _, _> = SortedList::builder().augment(Sum).build();
/// list.extend([4, 1, 5]);
/// assert_eq!(list.summary(), Some(&10));
///
/// list.remove(&4);
/// assert_eq!(list.summary(), Some(&6));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Sum;

impl<T> Augment<T> for Sum
where
    T: Clone + Add<Output = T>,
{
    type Summary = T;

    fn summarize(&self, value: &T, left: Option<&T>, right: Option<&T>) -> T {
        let mut total = value.clone();
        if let Some(left) = left {
            total = left.clone() + total;
        }
        if let Some(right) = right {
            total = total + right.clone();
        }
        total
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn sum_overflow_panics_in_debug() {
        let _ = Sum.summarize(&100i8, Some(&100), None);
    }

    #[test]
    fn sum_combines_children() {
        assert_eq!(Sum.summarize(&3, None, None), 3);
        assert_eq!(Sum.summarize(&3, Some(&4), None), 7);
        assert_eq!(Sum.summarize(&3, Some(&4), Some(&5)), 12);
    }
}
