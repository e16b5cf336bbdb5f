use core::cmp::Ordering::{Equal, Greater, Less};
use core::mem;
use core::sync::atomic::{self, AtomicUsize};

use alloc::vec::Vec;
use log::{debug, trace};
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::augment::Augment;
use crate::compare::Compare;

/// Source of tree identities. 0 is reserved for trees that have never changed.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

fn fresh_id() -> usize {
    NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

/// Size-augmented AVL tree backing `SortedList`.
///
/// Nodes live in an arena and link to each other through handles. Every mutation finishes with
/// a single upward pass (`retrace`) that refreshes the cached height, size and summary of each
/// ancestor and rotates wherever the balance factor reaches ±2.
pub(crate) struct RawOSTree<T, C, A: Augment<T>> {
    nodes: Arena<Node<T, A::Summary>>,
    root: Option<Handle>,
    /// Structural change counter, checked by cursors.
    version: u64,
    /// Identity checked by cursors alongside `version`; assigned on the first structural change
    /// and on clone.
    id: usize,
    compare: C,
    augment: A,
}

impl<T, C, A: Augment<T>> RawOSTree<T, C, A> {
    pub(crate) const fn new(compare: C, augment: A) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            version: 0,
            id: 0,
            compare,
            augment,
        }
    }

    pub(crate) fn with_capacity(capacity: usize, compare: C, augment: A) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            version: 0,
            id: 0,
            compare,
            augment,
        }
    }

    /// Returns the number of values in the tree.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[inline]
    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    pub(crate) fn id(&self) -> usize {
        self.id
    }

    pub(crate) fn compare(&self) -> &C {
        &self.compare
    }

    /// Number of levels in the tree; 0 when empty.
    pub(crate) fn height(&self) -> usize {
        usize::from(self.level(self.root))
    }

    pub(crate) fn summary(&self) -> Option<&A::Summary> {
        self.root.map(|root| self.nodes.get(root).summary())
    }

    pub(crate) fn clear(&mut self) {
        debug!("clearing tree of {} values", self.nodes.len());
        self.nodes.clear();
        self.root = None;
        self.bump_version();
    }

    #[inline]
    pub(crate) fn value(&self, handle: Handle) -> &T {
        self.nodes.get(handle).value()
    }

    /// Returns the minimum (`Side::Left`) or maximum (`Side::Right`) node.
    pub(crate) fn first(&self, side: Side) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, side))
    }

    /// Returns the in-order neighbour of `handle`: the successor for `Side::Right`, the
    /// predecessor for `Side::Left`.
    pub(crate) fn step(&self, handle: Handle, side: Side) -> Option<Handle> {
        let node = self.nodes.get(handle);
        if let Some(child) = node.child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut child = handle;
        let mut parent = node.parent();
        while let Some(p) = parent {
            let above = self.nodes.get(p);
            if above.child(side.opposite()) == Some(child) {
                return Some(p);
            }
            child = p;
            parent = above.parent();
        }
        None
    }

    /// Returns the node at zero-based `rank` in sorted order.
    pub(crate) fn select(&self, rank: usize) -> Option<Handle> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root?;
        let mut rank = rank;
        loop {
            let node = self.nodes.get(current);
            let left_size = self.size_of(node.left());
            current = match rank.cmp(&left_size) {
                Equal => return Some(current),
                Less => node.left()?,
                Greater => {
                    rank -= left_size + 1;
                    node.right()?
                }
            };
        }
    }

    /// Inserts `value` and rebalances.
    ///
    /// Equal values descend to the right, so a new duplicate lands after every existing member of
    /// its cluster.
    pub(crate) fn insert(&mut self, value: T)
    where
        C: Compare<T>,
    {
        let Some(mut parent) = self.root else {
            let root = self.alloc(value);
            self.root = Some(root);
            self.bump_version();
            return;
        };

        let side = loop {
            let node = self.nodes.get(parent);
            let side = if self.compare.compare(&value, node.value()) == Less {
                Side::Left
            } else {
                Side::Right
            };
            match node.child(side) {
                Some(child) => parent = child,
                None => break side,
            }
        };

        let leaf = self.alloc(value);
        self.attach_leaf(parent, side, leaf);
        self.bump_version();
        self.retrace(Some(parent));
    }

    /// Finds the leftmost node equal to `value` together with its rank.
    pub(crate) fn lower_bound(&self, value: &T) -> Option<(Handle, usize)>
    where
        C: Compare<T>,
    {
        let mut found = None;
        let mut passed = 0;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match self.compare.compare(node.value(), value) {
                Less => {
                    passed += self.size_of(node.left()) + 1;
                    current = node.right();
                }
                ordering => {
                    if ordering == Equal {
                        found = Some((handle, passed + self.size_of(node.left())));
                    }
                    current = node.left();
                }
            }
        }

        found
    }

    /// Finds the largest value strictly less than `value`.
    pub(crate) fn lower(&self, value: &T) -> Option<Handle>
    where
        C: Compare<T>,
    {
        let mut candidate = None;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if self.compare.compare(node.value(), value) == Less {
                candidate = Some(handle);
                current = node.right();
            } else {
                current = node.left();
            }
        }

        candidate
    }

    /// Finds the smallest value strictly greater than `value`.
    pub(crate) fn higher(&self, value: &T) -> Option<Handle>
    where
        C: Compare<T>,
    {
        let mut candidate = None;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if self.compare.compare(value, node.value()) == Less {
                candidate = Some(handle);
                current = node.left();
            } else {
                current = node.right();
            }
        }

        candidate
    }

    /// Removes the leftmost value equal to `value`.
    pub(crate) fn remove(&mut self, value: &T) -> Option<T>
    where
        C: Compare<T>,
    {
        let (handle, _) = self.lower_bound(value)?;
        Some(self.remove_node(handle))
    }

    /// Unlinks `handle` from the tree, rebalances, and returns its value.
    pub(crate) fn remove_node(&mut self, handle: Handle) -> T {
        let node = self.nodes.get(handle);
        let parent = node.parent();

        match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                // The successor has no left child, so removing it is one of the simple cases.
                // Exchanging values is not a structural change.
                let successor = self.extreme(right, Side::Left);
                let (target, source) = self.nodes.get_pair_mut(handle, successor);
                mem::swap(target.value_mut(), source.value_mut());
                return self.remove_node(successor);
            }
            (None, None) => match parent {
                Some(_) => self.detach_leaf(handle),
                None => self.root = None,
            },
            (Some(child), None) | (None, Some(child)) => {
                // Contraction: the only child takes the removed node's place.
                self.replace_child(parent, handle, child);
            }
        }

        trace!("removed node {handle:?}");
        let value = self.nodes.take(handle).into_value();
        self.bump_version();
        self.retrace(parent);
        value
    }

    /// Consumes the tree, returning its values in ascending order.
    pub(crate) fn into_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        let mut stack: SmallVec<[Handle; 64]> = SmallVec::new();
        let mut current = self.root.take();

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes.get(handle).left();
            }
            let Some(handle) = stack.pop() else {
                break;
            };
            let node = self.nodes.take(handle);
            current = node.right();
            values.push(node.into_value());
        }

        values
    }

    fn alloc(&mut self, value: T) -> Handle {
        let summary = self.augment.summarize(&value, None, None);
        self.nodes.alloc(Node::new(value, summary))
    }

    fn bump_version(&mut self) {
        if self.id == 0 {
            self.id = fresh_id();
        }
        self.version = self.version.wrapping_add(1);
    }

    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.nodes.get(handle).child(side) {
            handle = child;
        }
        handle
    }

    #[inline]
    fn size_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |h| self.nodes.get(h).size())
    }

    // Height counting a missing child as -1, shifted by one so it stays unsigned.
    #[inline]
    fn level(&self, handle: Option<Handle>) -> u8 {
        handle.map_or(0, |h| self.nodes.get(h).height() + 1)
    }

    fn balance_factor(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        i16::from(self.level(node.left())) - i16::from(self.level(node.right()))
    }

    /// Recomputes the cached height, size and summary of `handle` from its children.
    fn update(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());
        let height = self.level(left).max(self.level(right));
        let size = 1 + self.size_of(left) + self.size_of(right);
        let summary = self.augment.summarize(
            node.value(),
            left.map(|h| self.nodes.get(h).summary()),
            right.map(|h| self.nodes.get(h).summary()),
        );
        self.nodes.get_mut(handle).set_cached(height, size, summary);
    }

    /// Walks from `start` to the root, refreshing caches and rotating where the balance factor
    /// reaches ±2. The topmost node reached becomes the root.
    fn retrace(&mut self, start: Option<Handle>) {
        let mut current = start;
        while let Some(handle) = current {
            self.update(handle);
            let top = match self.balance_factor(handle) {
                -2 => self.rebalance(handle, Side::Right),
                2 => self.rebalance(handle, Side::Left),
                _ => handle,
            };

            current = self.nodes.get(top).parent();
            if current.is_none() {
                self.root = Some(top);
            }
        }
    }

    /// Restores balance at `handle`, whose `heavy` subtree is two levels taller than the other.
    /// Returns the node now occupying `handle`'s position.
    fn rebalance(&mut self, handle: Handle, heavy: Side) -> Handle {
        let Some(child) = self.nodes.get(handle).child(heavy) else {
            panic!("`RawOSTree::rebalance()` - heavy side of {handle:?} is empty!");
        };

        // A child leaning away from `heavy` needs a double rotation.
        let child_balance = self.balance_factor(child);
        let leans_inward = match heavy {
            Side::Left => child_balance < 0,
            Side::Right => child_balance > 0,
        };

        let pivot = if leans_inward {
            let Some(inner) = self.nodes.get(child).child(heavy.opposite()) else {
                panic!("`RawOSTree::rebalance()` - inner grandchild of {handle:?} is missing!");
            };
            self.rotate_up(inner);
            inner
        } else {
            child
        };

        self.rotate_up(pivot);
        self.update(pivot);
        pivot
    }

    /// Promotes `pivot` into its parent's position. A right child rotates left, a left child
    /// rotates right; the demoted parent adopts the pivot's inner child.
    ///
    /// Only the demoted node's caches are refreshed here. The caller refreshes the pivot.
    fn rotate_up(&mut self, pivot: Handle) {
        let Some(parent) = self.nodes.get(pivot).parent() else {
            panic!("`RawOSTree::rotate_up()` - pivot {pivot:?} has no parent!");
        };
        let Some(side) = self.nodes.get(parent).side_of(pivot) else {
            panic!("`RawOSTree::rotate_up()` - pivot {pivot:?} is not a child of {parent:?}!");
        };

        let grandparent = self.nodes.get(parent).parent();
        let inner = self.nodes.get(pivot).child(side.opposite());

        self.replace_child(grandparent, parent, pivot);

        let pivot_node = self.nodes.get_mut(pivot);
        pivot_node.set_child(side.opposite(), Some(parent));

        let parent_node = self.nodes.get_mut(parent);
        parent_node.set_parent(Some(pivot));
        parent_node.set_child(side, inner);

        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_parent(Some(parent));
        }

        self.update(parent);
        self.bump_version();
        trace!(
            "rotated {} at {parent:?}, promoting {pivot:?}",
            if side == Side::Right { "left" } else { "right" }
        );
    }

    /// Puts `replacement` where `old` hangs from `parent`, or at the root when `parent` is `None`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, replacement: Handle) {
        match parent {
            Some(p) => {
                let Some(side) = self.nodes.get(p).side_of(old) else {
                    panic!("`RawOSTree::replace_child()` - {old:?} is not a child of {p:?}!");
                };
                self.nodes.get_mut(p).set_child(side, Some(replacement));
            }
            None => self.root = Some(replacement),
        }
        self.nodes.get_mut(replacement).set_parent(parent);
    }

    /// Hangs the detached leaf `leaf` in the empty `side` slot of `parent`.
    fn attach_leaf(&mut self, parent: Handle, side: Side, leaf: Handle) {
        let node = self.nodes.get(leaf);
        assert!(
            node.is_leaf() && node.parent().is_none(),
            "`RawOSTree::attach_leaf()` - {leaf:?} is not a detached leaf!"
        );
        assert!(
            self.nodes.get(parent).child(side).is_none(),
            "`RawOSTree::attach_leaf()` - {side:?} slot of {parent:?} is occupied!"
        );

        self.nodes.get_mut(parent).set_child(side, Some(leaf));
        self.nodes.get_mut(leaf).set_parent(Some(parent));
    }

    /// Unhooks the leaf `leaf` from its parent.
    fn detach_leaf(&mut self, leaf: Handle) {
        let node = self.nodes.get(leaf);
        let parent = node.parent();
        let side = parent.and_then(|p| self.nodes.get(p).side_of(leaf));
        let (Some(parent), Some(side), true) = (parent, side, node.is_leaf()) else {
            panic!("`RawOSTree::detach_leaf()` - {leaf:?} is not a leaf with a parent!");
        };

        self.nodes.get_mut(parent).set_child(side, None);
        self.nodes.get_mut(leaf).set_parent(None);
    }
}

impl<T, C, A> Clone for RawOSTree<T, C, A>
where
    T: Clone,
    C: Clone,
    A: Augment<T> + Clone,
    A::Summary: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            version: self.version,
            id: fresh_id(),
            compare: self.compare.clone(),
            augment: self.augment.clone(),
        }
    }
}
