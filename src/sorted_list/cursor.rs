use super::SortedList;
use crate::augment::Augment;
use crate::error::Error;
use crate::raw::{Handle, Side};

/// A fail-fast position in a [`SortedList`] that does not borrow the list between steps.
///
/// A cursor remembers the list's structural version when it is created. Each call to
/// [`next`](Cursor::next) first checks that version: once the list has been structurally
/// modified (an insertion, a removal, or [`clear`](SortedList::clear)), every further step
/// yields [`Error::ConcurrentModification`] instead of a value, until the cursor is
/// [`restart`](Cursor::restart)ed.
///
/// A cursor belongs to the list that created it. Stepping it over any other list, including a
/// clone, yields [`Error::ConcurrentModification`] once either list has changed.
///
/// # Examples
///
/// ```
/// use sorted_avl::{Error, SortedList};
///
/// let mut list = SortedList::from([1, 2, 3]);
/// let mut cursor = list.cursor();
/// assert_eq!(cursor.next(&list), Some(Ok(&1)));
///
/// list.insert(4);
/// assert_eq!(cursor.next(&list), Some(Err(Error::ConcurrentModification)));
///
/// cursor.restart(&list);
/// let mut seen = Vec::new();
/// while let Some(value) = cursor.next(&list) {
///     seen.push(*value.unwrap());
/// }
/// assert_eq!(seen, [1, 2, 3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    next: Option<Handle>,
    version: u64,
    tree: usize,
}

impl<T, C, A: Augment<T>> SortedList<T, C, A> {
    /// Creates a [`Cursor`] positioned before the smallest value.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor {
            next: self.tree.first(Side::Left),
            version: self.tree.version(),
            tree: self.tree.id(),
        }
    }
}

impl Cursor {
    /// Advances the cursor, returning the next value in ascending order.
    ///
    /// Returns `None` once every value has been visited.
    ///
    /// # Errors
    ///
    /// Yields `Some(Err(Error::ConcurrentModification))` if `list` was structurally modified
    /// since the cursor was created or last restarted, or is not the list the cursor came from.
    /// The cursor does not move in that case.
    pub fn next<'a, T, C, A: Augment<T>>(&mut self, list: &'a SortedList<T, C, A>) -> Option<Result<&'a T, Error>> {
        if !self.is_current(list) {
            return Some(Err(Error::ConcurrentModification));
        }

        let handle = self.next?;
        self.next = list.tree.step(handle, Side::Right);
        Some(Ok(list.tree.value(handle)))
    }

    /// Moves the cursor back before the smallest value of `list` and adopts its current version.
    pub fn restart<T, C, A: Augment<T>>(&mut self, list: &SortedList<T, C, A>) {
        *self = list.cursor();
    }

    /// Returns `true` if `list` is the list the cursor was created from and has not been
    /// structurally modified since the cursor was created or last restarted.
    #[must_use]
    pub fn is_current<T, C, A: Augment<T>>(&self, list: &SortedList<T, C, A>) -> bool {
        self.tree == list.tree.id() && self.version == list.tree.version()
    }
}
