/// Errors reported by [`SortedList`](crate::SortedList) queries and cursors.
///
/// Every variant is recoverable. Violations of the tree's internal invariants are bugs in this
/// crate and panic instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An insertion was given no value.
    #[error("cannot add a missing value")]
    MissingValue,
    /// A rank was outside `0..len`.
    #[error("rank {rank} is out of bounds for a list of length {len}")]
    RankOutOfBounds {
        /// The requested rank.
        rank: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },
    /// The value is not in the list.
    #[error("value not found")]
    NotFound,
    /// No stored value is strictly less than the given value.
    #[error("no value is strictly less than the given value")]
    NoPredecessor,
    /// No stored value is strictly greater than the given value.
    #[error("no value is strictly greater than the given value")]
    NoSuccessor,
    /// The list was structurally modified after the cursor was created or restarted.
    #[error("list was structurally modified during iteration")]
    ConcurrentModification,
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The caller passed an argument the operation cannot accept.
    InvalidArgument,
    /// The requested element does not exist.
    NotFound,
    /// A cursor observed a structural change and stopped.
    ConcurrentMutation,
}

impl Error {
    /// Returns the category this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_avl::{ErrorKind, SortedList};
    ///
    /// let list = SortedList::from([1, 2]);
    /// assert_eq!(list.get(5).unwrap_err().kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(list.lower(&1).unwrap_err().kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingValue | Error::RankOutOfBounds { .. } => ErrorKind::InvalidArgument,
            Error::NotFound | Error::NoPredecessor | Error::NoSuccessor => ErrorKind::NotFound,
            Error::ConcurrentModification => ErrorKind::ConcurrentMutation,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(
            Error::RankOutOfBounds { rank: 4, len: 2 }.to_string(),
            "rank 4 is out of bounds for a list of length 2"
        );
        assert_eq!(Error::NoPredecessor.to_string(), "no value is strictly less than the given value");
    }

    #[test]
    fn kinds() {
        assert_eq!(Error::MissingValue.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(Error::NoSuccessor.kind(), ErrorKind::NotFound);
        assert_eq!(Error::ConcurrentModification.kind(), ErrorKind::ConcurrentMutation);
    }
}
