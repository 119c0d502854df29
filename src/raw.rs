//! Recursive tree-editing procedures over owned subtrees.
//!
//! Each mutating procedure takes a subtree by value and returns the subtree
//! that replaces it. Callers reassign the returned link in place of the one
//! they passed in, so a rotation deep in the tree propagates upward through
//! the ordinary return path. On the way back up every visited node has its
//! height recomputed before it is balanced.
//!
//! ```
//! use avl_core::raw;
//! use avl_core::NaturalOrder;
//!
//! let mut root = None;
//! for key in [10, 20, 30] {
//!     root = Some(raw::insert(root, key, (), &NaturalOrder));
//! }
//! let node = root.as_deref().unwrap();
//! assert_eq!(*node.key(), 20);
//! assert_eq!(node.height(), 2);
//!
//! let root = raw::remove(root, &20, &NaturalOrder);
//! assert!(raw::find(&root, &20, &NaturalOrder).is_none());
//! ```

use std::cmp::Ordering;

use crate::compare::Comparator;
pub use crate::node::{height, Link, Node};

/// Rotates the subtree right and returns its new root.
///
/// The left child becomes the new root; its former right subtree becomes the
/// left subtree of `node`. Returns `node` unchanged if it has no left child.
pub fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    match node.left.take() {
        None => node,
        Some(mut new_root) => {
            node.left = new_root.right.take();
            node.adjust_height();
            new_root.right = Some(node);
            new_root.adjust_height();
            new_root
        }
    }
}

/// Rotates the subtree left and returns its new root.
///
/// Mirror image of [`rotate_right`].
pub fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    match node.right.take() {
        None => node,
        Some(mut new_root) => {
            node.right = new_root.left.take();
            node.adjust_height();
            new_root.left = Some(node);
            new_root.adjust_height();
            new_root
        }
    }
}

/// Rotates the left child left, then the subtree right.
pub fn rotate_left_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.left = node.left.take().map(rotate_left);
    rotate_right(node)
}

/// Rotates the right child right, then the subtree left.
pub fn rotate_right_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.right = node.right.take().map(rotate_right);
    rotate_left(node)
}

fn balance_factor<K, V>(link: &Link<K, V>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/// Child position below a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Rotation applied by [`balance`], named by the side of the child that rises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    Single(Side),
    Double(Side),
}

impl Rotation {
    /// Rewrites the path to a node below the rotated subtree root so that it
    /// leads to the same node afterwards.
    ///
    /// `trail` is stored bottom-up: its last element is the first step from the root.
    fn retrace(self, trail: &mut Vec<Side>) {
        match self {
            Rotation::Single(up) => retrace_single(trail, up),
            Rotation::Double(up) => {
                if trail.last() == Some(&up) {
                    trail.pop();
                    retrace_single(trail, up.flip());
                    trail.push(up);
                }
                retrace_single(trail, up);
            }
        }
    }
}

fn retrace_single(trail: &mut Vec<Side>, up: Side) {
    let down = up.flip();
    match trail.pop() {
        // Old root moves down
        None => trail.push(down),
        Some(side) if side == down => {
            trail.push(down);
            trail.push(down);
        }
        Some(_) => match trail.pop() {
            // Risen child is the new root
            None => {}
            Some(side) if side == up => trail.push(up),
            // Inner grandchild subtree changes parent
            Some(_) => {
                trail.push(up);
                trail.push(down);
            }
        },
    }
}

fn rebalance<K, V>(node: Box<Node<K, V>>) -> (Box<Node<K, V>>, Option<Rotation>) {
    let factor = node.balance_factor();
    if factor > 1 {
        // Left subtree is higher
        if balance_factor(&node.left) < 0 {
            (rotate_left_right(node), Some(Rotation::Double(Side::Left)))
        } else {
            (rotate_right(node), Some(Rotation::Single(Side::Left)))
        }
    } else if factor < -1 {
        // Right subtree is higher
        if balance_factor(&node.right) > 0 {
            (rotate_right_left(node), Some(Rotation::Double(Side::Right)))
        } else {
            (rotate_left(node), Some(Rotation::Single(Side::Right)))
        }
    } else {
        (node, None)
    }
}

/// Restores the AVL condition at `node` with at most one (single or double) rotation.
///
/// The children of `node` must be balanced and their heights, as well as the
/// height of `node` itself, must be current.
pub fn balance<K, V>(node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    rebalance(node).0
}

/// Inserts a key-value pair into the subtree and returns the new subtree root.
///
/// Keys comparing `Equal` to an existing key are routed right, so duplicates
/// are kept and the new entry sorts after the existing equal ones.
pub fn insert<K, V, C>(link: Link<K, V>, key: K, value: V, cmp: &C) -> Box<Node<K, V>>
where
    C: Comparator<K> + ?Sized,
{
    insert_traced(link, key, value, cmp, &mut Vec::new())
}

/// Like [`insert`], and leaves the path from the new subtree root to the
/// inserted node in `trail`, bottom-up.
pub(crate) fn insert_traced<K, V, C>(
    link: Link<K, V>,
    key: K,
    value: V,
    cmp: &C,
    trail: &mut Vec<Side>,
) -> Box<Node<K, V>>
where
    C: Comparator<K> + ?Sized,
{
    let mut node = match link {
        None => return Node::create(key, value),
        Some(node) => node,
    };
    let side = match cmp.compare(&key, &node.key) {
        Ordering::Less => Side::Left,
        Ordering::Equal | Ordering::Greater => Side::Right,
    };
    match side {
        Side::Left => node.left = Some(insert_traced(node.left.take(), key, value, cmp, trail)),
        Side::Right => {
            node.right = Some(insert_traced(node.right.take(), key, value, cmp, trail))
        }
    }
    trail.push(side);
    node.adjust_height();
    let (node, rotation) = rebalance(node);
    if let Some(rotation) = rotation {
        rotation.retrace(trail);
    }
    node
}

/// Follows a bottom-up `trail` from `node`.
pub(crate) fn descend<'a, K, V>(mut node: &'a Node<K, V>, trail: &[Side]) -> &'a Node<K, V> {
    for side in trail.iter().rev() {
        let child = match side {
            Side::Left => node.left(),
            Side::Right => node.right(),
        };
        node = child.expect("trail leads to an existing node");
    }
    node
}

/// Removes one entry with the given key from the subtree and returns the new subtree root.
///
/// Removing a key that is not present leaves the subtree unchanged.
pub fn remove<K, V, C>(link: Link<K, V>, key: &K, cmp: &C) -> Link<K, V>
where
    C: Comparator<K> + ?Sized,
{
    let mut removed = None;
    remove_node(link, key, cmp, &mut removed)
}

/// Like [`remove`], but hands the removed key-value pair to `removed`.
pub(crate) fn remove_node<K, V, C>(
    link: Link<K, V>,
    key: &K,
    cmp: &C,
    removed: &mut Option<(K, V)>,
) -> Link<K, V>
where
    C: Comparator<K> + ?Sized,
{
    let mut node = link?;
    match cmp.compare(key, &node.key) {
        Ordering::Less => node.left = remove_node(node.left.take(), key, cmp, removed),
        Ordering::Greater => node.right = remove_node(node.right.take(), key, cmp, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                *removed = Some((node.key, node.value));
                return None;
            }
            (Some(child), None) | (None, Some(child)) => {
                *removed = Some((node.key, node.value));
                return Some(child);
            }
            (left, Some(right)) => {
                // Two children: the in-order successor takes this node's place
                let (right, successor) = remove_min(right);
                let Node {
                    key: successor_key,
                    value: successor_value,
                    ..
                } = *successor;
                let key = std::mem::replace(&mut node.key, successor_key);
                let value = std::mem::replace(&mut node.value, successor_value);
                *removed = Some((key, value));
                node.left = left;
                node.right = right;
            }
        },
    }
    node.adjust_height();
    Some(balance(node))
}

/// Detaches the leftmost node of the subtree.
/// Returns the rebalanced remainder and the detached node.
fn remove_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (right, node)
        }
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            node.adjust_height();
            (Some(balance(node)), min)
        }
    }
}

/// Returns the node holding the given key, if any.
pub fn find<'a, K, V, C>(link: &'a Link<K, V>, key: &K, cmp: &C) -> Option<&'a Node<K, V>>
where
    C: Comparator<K> + ?Sized,
{
    let node = link.as_deref()?;
    match cmp.compare(key, &node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => find(&node.left, key, cmp),
        Ordering::Greater => find(&node.right, key, cmp),
    }
}

pub(crate) fn find_mut<'a, K, V, C>(
    link: &'a mut Link<K, V>,
    key: &K,
    cmp: &C,
) -> Option<&'a mut Node<K, V>>
where
    C: Comparator<K> + ?Sized,
{
    let node = link.as_deref_mut()?;
    match cmp.compare(key, &node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => find_mut(&mut node.left, key, cmp),
        Ordering::Greater => find_mut(&mut node.right, key, cmp),
    }
}

pub(crate) fn first<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    let mut current = link.as_deref()?;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    Some(current)
}

pub(crate) fn last<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    let mut current = link.as_deref()?;
    while let Some(right) = current.right.as_deref() {
        current = right;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;

    fn leaf(key: i32) -> Box<Node<i32, ()>> {
        Node::create(key, ())
    }

    fn keys_pre_order(link: &Link<i32, ()>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            out.push(node.key);
            keys_pre_order(&node.left, out);
            keys_pre_order(&node.right, out);
        }
    }

    fn build(keys: &[i32]) -> Link<i32, ()> {
        let mut root = None;
        for &key in keys {
            root = Some(insert(root, key, (), &NaturalOrder));
        }
        root
    }

    #[test]
    fn test_rotate_right() {
        //     3      2
        //    /  ->  / \
        //   2      1   3
        //  /
        // 1
        let mut two = leaf(2);
        two.left = Some(leaf(1));
        two.adjust_height();
        let mut three = leaf(3);
        three.left = Some(two);
        three.adjust_height();
        assert_eq!(three.height, 3);

        let root = rotate_right(three);
        assert_eq!(root.key, 2);
        assert_eq!(root.height, 2);
        assert_eq!(root.left().map(|n| n.key), Some(1));
        assert_eq!(root.right().map(|n| (n.key, n.height)), Some((3, 1)));
    }

    #[test]
    fn test_rotate_without_child_is_identity() {
        let root = rotate_right(leaf(7));
        assert_eq!((root.key, root.height), (7, 1));
        let root = rotate_left(leaf(7));
        assert_eq!((root.key, root.height), (7, 1));
    }

    #[test]
    fn test_rotate_left_right() {
        //   3       2
        //  /       / \
        // 1   ->  1   3
        //  \
        //   2
        let mut one = leaf(1);
        one.right = Some(leaf(2));
        one.adjust_height();
        let mut three = leaf(3);
        three.left = Some(one);
        three.adjust_height();

        let root = rotate_left_right(three);
        let mut keys = Vec::new();
        keys_pre_order(&Some(root), &mut keys);
        assert_eq!(keys, [2, 1, 3]);
    }

    #[test]
    fn test_rotate_right_left() {
        let mut three = leaf(3);
        three.left = Some(leaf(2));
        three.adjust_height();
        let mut one = leaf(1);
        one.right = Some(three);
        one.adjust_height();

        let root = rotate_right_left(one);
        assert_eq!(root.height, 2);
        let mut keys = Vec::new();
        keys_pre_order(&Some(root), &mut keys);
        assert_eq!(keys, [2, 1, 3]);
    }

    #[test]
    fn test_balance_leaves_balanced_node() {
        let mut root = leaf(2);
        root.left = Some(leaf(1));
        root.adjust_height();
        let root = balance(root);
        assert_eq!(root.key, 2);
        assert_eq!(root.balance_factor(), 1);
    }

    #[test]
    fn test_insert_pre_order() {
        let root = build(&[10, 20, 30, 40, 50, 25]);
        let mut keys = Vec::new();
        keys_pre_order(&root, &mut keys);
        assert_eq!(keys, [30, 20, 10, 25, 40, 50]);
    }

    #[test]
    fn test_insert_left_and_right() {
        let root = build(&[5, 1]);
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 5);
        assert_eq!(node.left().map(|n| n.key), Some(1));
        assert!(node.right().is_none());

        let root = Some(insert(root, 10, (), &NaturalOrder));
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 5);
        assert_eq!(node.left().map(|n| n.key), Some(1));
        assert_eq!(node.right().map(|n| n.key), Some(10));
    }

    #[test]
    fn test_remove_nested() {
        let root = build(&[10, 2, 30, 40]);
        let root = remove(root, &30, &NaturalOrder);
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 10);
        assert_eq!(node.left().map(|n| n.key), Some(2));
        assert_eq!(node.right().map(|n| n.key), Some(40));

        let root = remove(root, &10, &NaturalOrder);
        let node = root.as_deref().unwrap();
        assert_eq!(node.key, 40);
        assert_eq!(node.left().map(|n| n.key), Some(2));
        assert!(node.right().is_none());
    }

    #[test]
    fn test_remove_last_node() {
        let root = build(&[1]);
        assert!(find(&root, &1, &NaturalOrder).is_some());
        let root = remove(root, &1, &NaturalOrder);
        assert!(root.is_none());
        assert!(find(&root, &1, &NaturalOrder).is_none());
        assert!(remove(root, &1, &NaturalOrder).is_none());
    }

    #[test]
    fn test_remove_missing_key() {
        let root = build(&[2, 1, 3]);
        let root = remove(root, &4, &NaturalOrder);
        let mut keys = Vec::new();
        keys_pre_order(&root, &mut keys);
        assert_eq!(keys, [2, 1, 3]);
    }

    fn insert_and_locate(link: Link<i32, char>, key: i32, value: char) -> (Link<i32, char>, char) {
        let mut trail = Vec::new();
        let root = insert_traced(link, key, value, &NaturalOrder, &mut trail);
        let found = descend(&root, &trail).value;
        (Some(root), found)
    }

    #[test]
    fn test_trail_follows_rotations() {
        // Inserted node rises to the root in a double rotation
        let (root, _) = insert_and_locate(None, 3, 'a');
        let (root, _) = insert_and_locate(root, 1, 'b');
        let (root, found) = insert_and_locate(root, 2, 'c');
        assert_eq!(found, 'c');
        assert_eq!(root.as_deref().map(|n| (n.key, n.height)), Some((2, 2)));

        let mut root = None;
        let keys = [50, 20, 80, 10, 30, 25, 27, 26, 90, 95, 99, 1, 2, 3];
        for (i, &key) in keys.iter().enumerate() {
            let value = char::from(b'a' + i as u8);
            let (next, found) = insert_and_locate(root, key, value);
            assert_eq!(found, value);
            root = next;
        }
    }

    #[test]
    fn test_trail_with_duplicates() {
        let mut root = None;
        for (key, value) in [(5, 'a'), (3, 'b'), (5, 'c'), (5, 'd'), (7, 'e'), (5, 'f')] {
            let (next, found) = insert_and_locate(root, key, value);
            assert_eq!(found, value);
            root = next;
        }
        assert_eq!(first(&root).map(|n| n.key), Some(3));
        assert_eq!(last(&root).map(|n| n.key), Some(7));
    }
}
