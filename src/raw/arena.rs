use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes.
///
/// Freed slots are recycled through a free-list, so a handle may be reused after the node it
/// addressed has been removed. Accessing a freed slot panics.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(element);
            return handle;
        }

        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        self.slots.push(Some(element));
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Borrows two distinct slots mutably at once.
    pub(crate) fn get_pair_mut(&mut self, a: Handle, b: Handle) -> (&mut T, &mut T) {
        let (i, j) = (a.to_index(), b.to_index());
        assert_ne!(i, j, "`Arena::get_pair_mut()` - handles alias the same slot!");

        let (first, second) = if i < j {
            let (head, tail) = self.slots.split_at_mut(j);
            (&mut head[i], &mut tail[0])
        } else {
            let (head, tail) = self.slots.split_at_mut(i);
            (&mut tail[0], &mut head[j])
        };

        (
            first.as_mut().expect("`Arena::get_pair_mut()` - `a` is invalid!"),
            second.as_mut().expect("`Arena::get_pair_mut()` - `b` is invalid!"),
        )
    }

    /// Removes the element at `handle` and puts the slot on the free-list.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn with_capacity_reserves_slots() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(arena.take(a), "a");

        let c = arena.alloc("c");
        assert_eq!(c, a);
        assert_eq!(*arena.get(b), "b");
        assert_eq!(*arena.get(c), "c");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn pair_borrow_in_either_order() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);

        let (x, y) = arena.get_pair_mut(b, a);
        core::mem::swap(x, y);
        assert_eq!((*arena.get(a), *arena.get(b)), (2, 1));

        let (x, y) = arena.get_pair_mut(a, b);
        *x += 10;
        *y += 20;
        assert_eq!((*arena.get(a), *arena.get(b)), (12, 21));
    }

    #[test]
    #[should_panic(expected = "`Arena::get_pair_mut()` - handles alias the same slot!")]
    fn pair_borrow_of_one_slot_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let _ = arena.get_pair_mut(a, a);
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is invalid!")]
    fn freed_handle_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.take(a);
        let _ = arena.get(a);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is at maximum capacity")]
    fn alloc_past_max_panics() {
        let mut arena = Arena::new();
        for _ in 0..=Handle::MAX + 1 {
            arena.alloc(());
        }
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = vec![];
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        model.push((arena.alloc(value), value));
                    }
                    Operation::Set(which, value) if !model.is_empty() => {
                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Operation::Take(which) if !model.is_empty() => {
                        let index = which % model.len();
                        let taken = arena.take(model[index].0);
                        let (_, expected) = model.swap_remove(index);
                        prop_assert_eq!(taken, expected);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                    _ => continue,
                }

                prop_assert_eq!(arena.len(), model.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Set(usize, u32),
        Take(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Set(which, value)),
            8 => any::<usize>().prop_map(Operation::Take),
            1 => Just(Operation::Clear),
        ]
    }
}
