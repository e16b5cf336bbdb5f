use core::cmp::Ordering;

/// A total order over `T`, supplied when a [`SortedList`](crate::SortedList) is constructed.
///
/// Implemented by [`Natural`] for any `T: Ord`, and by every closure or function of the form
/// `Fn(&T, &T) -> Ordering`.
///
/// It is a logic error for a comparator to be inconsistent (for example, to report `a < b` and
/// `b < a`), or for an element's ordering to change while it is stored. The behavior resulting
/// from such a logic error is not specified, but will not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use sorted_avl::SortedList;
///
/// let mut list: SortedList<i32, _> = SortedList::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// list.extend([1, 3, 2]);
/// assert_eq!(list.to_vec(), [3, 2, 1]);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of `T` as given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use core::cmp::Ordering::{Equal, Greater, Less};

    #[test]
    fn natural_follows_ord() {
        assert_eq!(Natural.compare(&1, &2), Less);
        assert_eq!(Natural.compare("b", "a"), Greater);
        assert_eq!(Natural.compare(&3u8, &3u8), Equal);
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"abc", &"de"), Greater);
        assert_eq!(by_len.compare(&"ab", &"de"), Equal);
    }
}
