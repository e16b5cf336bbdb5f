use core::fmt;
use core::marker::PhantomData;

use super::SortedList;
use crate::augment::Augment;
use crate::compare::Natural;
use crate::raw::RawOSTree;

/// Configures and creates a [`SortedList`].
///
/// Created by [`SortedList::builder`]. Starts out with [`Natural`] ordering, no augmentation
/// and no preallocated capacity.
///
/// # Examples
///
/// ```
/// use sorted_avl::SortedList;
///
/// let mut list: SortedList<&str, _> = SortedList::builder()
///     .comparator(|a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase()))
///     .build();
/// list.extend(["b", "A", "c"]);
/// assert_eq!(list.to_vec(), ["A", "b", "c"]);
/// ```
#[must_use = "a builder does nothing until `build` is called"]
pub struct Builder<T, C = Natural, A = ()> {
    compare: C,
    augment: A,
    capacity: usize,
    marker: PhantomData<fn() -> T>,
}

impl<T> Builder<T> {
    pub(super) fn new() -> Self {
        Builder {
            compare: Natural,
            augment: (),
            capacity: 0,
            marker: PhantomData,
        }
    }
}

impl<T, C, A> Builder<T, C, A> {
    /// Orders the list with `compare` instead of the current comparator.
    pub fn comparator<C2>(self, compare: C2) -> Builder<T, C2, A> {
        Builder {
            compare,
            augment: self.augment,
            capacity: self.capacity,
            marker: PhantomData,
        }
    }

    /// Maintains `augment`'s summary in every node.
    pub fn augment<A2>(self, augment: A2) -> Builder<T, C, A2> {
        Builder {
            compare: self.compare,
            augment,
            capacity: self.capacity,
            marker: PhantomData,
        }
    }

    /// Preallocates room for at least `capacity` values.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Creates the configured, empty list.
    pub fn build(self) -> SortedList<T, C, A>
    where
        A: Augment<T>,
    {
        SortedList {
            tree: RawOSTree::with_capacity(self.capacity, self.compare, self.augment),
        }
    }
}

impl<T, C: fmt::Debug, A: fmt::Debug> fmt::Debug for Builder<T, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("compare", &self.compare)
            .field("augment", &self.augment)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::augment::Sum;
    use alloc::format;

    #[test]
    fn defaults() {
        let builder: Builder<i32> = SortedList::builder();
        assert_eq!(format!("{builder:?}"), "Builder { compare: Natural, augment: (), capacity: 0 }");

        let list = builder.build();
        assert!(list.is_empty());
        assert_eq!(list.summary(), None);
    }

    #[test]
    fn later_settings_replace_earlier_ones() {
        let mut list: SortedList<u64, _, _> = SortedList::builder()
            .comparator(|a: &u64, b: &u64| b.cmp(a))
            .augment(())
            .augment(Sum)
            .capacity(4)
            .capacity(100)
            .build();
        assert!(list.capacity() >= 100);

        list.extend([1, 5, 3]);
        assert_eq!(list.to_vec(), [5, 3, 1]);
        assert_eq!(list.summary(), Some(&9));
    }
}
