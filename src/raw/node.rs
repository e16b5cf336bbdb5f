use super::handle::Handle;

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// An AVL node. Children are owned through the arena; `parent` is a back-link used only for
/// upward navigation.
#[derive(Clone)]
pub(crate) struct Node<T, S> {
    value: T,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
    // 0 for a leaf.
    height: u8,
    // 1 + number of descendants.
    size: usize,
    summary: S,
}

impl<T, S> Node<T, S> {
    /// Creates a detached leaf.
    pub(crate) fn new(value: T, summary: S) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
            height: 0,
            size: 1,
            summary,
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns the side `child` hangs from, or `None` if it is not a child of this node.
    pub(crate) fn side_of(&self, child: Handle) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[inline]
    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) fn summary(&self) -> &S {
        &self.summary
    }

    /// Stores freshly computed cached values.
    pub(crate) fn set_cached(&mut self, height: u8, size: usize, summary: S) {
        self.height = height;
        self.size = size;
        self.summary = summary;
    }
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_a_leaf() {
        let node: Node<i32, ()> = Node::new(7, ());
        assert!(node.is_leaf());
        assert_eq!((node.height(), node.size()), (0, 1));
        assert_eq!(node.parent(), None);
    }

    #[test]
    fn children_by_side() {
        let (a, b) = (Handle::from_index(1), Handle::from_index(2));
        let mut node: Node<i32, ()> = Node::new(0, ());
        node.set_child(Side::Left, Some(a));
        assert_eq!(node.side_of(a), Some(Side::Left));
        assert_eq!(node.side_of(b), None);

        node.set_child(Side::Left.opposite(), Some(b));
        assert_eq!(node.child(Side::Right), Some(b));
        assert!(!node.is_leaf());
    }
}
