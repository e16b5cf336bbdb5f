use core::fmt;
use core::num::NonZero;

// Narrow handles under test so that node layout stays small and the arena's
// capacity limit is reachable from unit tests.
#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Index of a node slot in the [`Arena`](super::arena::Arena).
///
/// Stored off by one so that `Option<Handle>` is the same size as `Handle`; every parent and
/// child link in the tree is an `Option<Handle>`.
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// The largest slot index a handle can address.
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new((index + 1) as RawHandle) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_index())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Links are `Option<Handle>`, so the niche must hold.
    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, RawHandle);

    #[test]
    #[should_panic(expected = "`Handle::from_index()` - `index` > `Handle::MAX`!")]
    fn index_past_max_panics() {
        let _ = Handle::from_index(Handle::MAX + 1);
    }

    #[test]
    fn debug_shows_slot_index() {
        assert_eq!(format!("{:?}", Handle::from_index(7)), "#7");
        assert_eq!(format!("{:?}", Some(Handle::from_index(0))), "Some(#0)");
    }

    proptest! {
        #[test]
        fn index_survives_conversion(index in 0..=Handle::MAX) {
            prop_assert_eq!(Handle::from_index(index).to_index(), index);
        }
    }
}
