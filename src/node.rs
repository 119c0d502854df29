use std::cmp;

/// Owned link to a subtree. `None` is the empty subtree.
pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A tree vertex.
///
/// Nodes are only ever handed out by shared reference, so they serve as
/// read-only views of the tree structure: key, value, cached height and
/// child subtrees.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) height: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn create(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    /// Returns `height(left) - height(right)`.
    pub fn balance_factor(&self) -> isize {
        self.left_height() as isize - self.right_height() as isize
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn left_height(&self) -> usize {
        height(&self.left)
    }

    pub(crate) fn right_height(&self) -> usize {
        height(&self.right)
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(self.left_height(), self.right_height());
    }
}

/// Returns the cached height of a subtree, 0 for the empty subtree.
#[inline]
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}
