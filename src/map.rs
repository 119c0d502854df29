//! An ordered map implemented with an AVL tree.

#[cfg(any(test, feature = "consistency_check"))]
use std::cmp;
use std::fmt;
use std::iter::{FromIterator, Rev};

use crate::compare::{Comparator, NaturalOrder};
use crate::iter::{IntoIter, Iter, Keys, PreOrder, Values};
use crate::node::{Link, Node};
use crate::raw;

/// An ordered map implemented with an AVL tree.
///
/// Keys are ordered by the comparator `C`, which defaults to the natural
/// ordering of keys implementing [`Ord`].
///
/// ```
/// use avl_core::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.add(0, "zero");
/// map.add(1, "one");
/// map.add(2, "two");
/// assert_eq!(map.find(&1), Some(&"one"));
/// map.remove(&1);
/// assert!(map.find(&1).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K, V, C = NaturalOrder> {
    root: Link<K, V>,
    num_nodes: usize,
    cmp: C,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map ordered by the natural ordering of `K`.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Creates an empty map ordered by the given comparator.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            num_nodes: 0,
            cmp,
        }
    }

    /// Returns the comparator used to order keys.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, 0 for an empty map.
    pub fn height(&self) -> usize {
        raw::height(&self.root)
    }

    /// Returns a read-only view of the root node, or `None` if the map is empty.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        raw::first(&self.root).map(|node| (&node.key, &node.value))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        raw::last(&self.root).map(|node| (&node.key, &node.value))
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.num_nodes)
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { iter: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { iter: self.iter() }
    }

    /// Lazily yields all entries in ascending key order.
    ///
    /// Each call starts a fresh, independent traversal.
    pub fn in_order_traversal(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Lazily yields all entries in descending key order.
    pub fn reverse_in_order_traversal(&self) -> Rev<Iter<'_, K, V>> {
        self.iter().rev()
    }

    /// Lazily yields the nodes in pre-order: each node before its left, then its right subtree.
    pub fn pre_order_traversal(&self) -> PreOrder<'_, K, V> {
        PreOrder::new(self.root.as_deref())
    }
}

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Adds a key-value pair and returns a view of the inserted node.
    ///
    /// Existing entries with an equal key are kept; the new entry is placed
    /// after them in key order.
    ///
    /// ```
    /// use avl_core::AvlTreeMap;
    /// let mut map = AvlTreeMap::new();
    /// let node = map.add(10, "a");
    /// assert_eq!((*node.key(), *node.value(), node.height()), (10, "a", 1));
    /// map.add(20, "b");
    /// assert_eq!(map.root().map(|root| root.height()), Some(2));
    /// ```
    pub fn add(&mut self, key: K, value: V) -> &Node<K, V> {
        let mut trail = Vec::new();
        let root = raw::insert_traced(self.root.take(), key, value, &self.cmp, &mut trail);
        self.num_nodes += 1;
        let root = self.root.insert(root);
        raw::descend(root, &trail)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already had an entry with an equal key, its value is
    /// replaced in place and the old value is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(node) = raw::find_mut(&mut self.root, &key, &self.cmp) {
            return Some(std::mem::replace(&mut node.value, value));
        }
        self.root = Some(raw::insert(self.root.take(), key, value, &self.cmp));
        self.num_nodes += 1;
        None
    }

    /// Removes an entry with the given key from the map.
    /// Removing a key that is not in the map does nothing.
    pub fn remove(&mut self, key: &K) -> &mut Self {
        self.remove_entry(key);
        self
    }

    /// Removes an entry with the given key from the map.
    /// Returns the stored key and value if the key was previously in the map.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let mut removed = None;
        self.root = raw::remove_node(self.root.take(), key, &self.cmp, &mut removed);
        if removed.is_some() {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        removed
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn find(&self, key: &K) -> Option<&V> {
        raw::find(&self.root, key, &self.cmp).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        raw::find_mut(&mut self.root, key, &self.cmp).map(|node| &mut node.value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        raw::find(&self.root, key, &self.cmp).map(|node| (&node.key, &node.value))
    }

    /// Returns true if the map contains a value for the key.
    pub fn contains_key(&self, key: &K) -> bool {
        raw::find(&self.root, key, &self.cmp).is_some()
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check tree nodes
        let num_nodes = Self::check_node(&self.root);

        // Check key order
        let mut keys = self.keys();
        if let Some(mut prev) = keys.next() {
            for key in keys {
                assert!(self.cmp.compare(prev, key) != cmp::Ordering::Greater);
                prev = key;
            }
        }

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
    }

    /// Checks heights and AVL condition of a subtree and returns its number of nodes.
    #[cfg(any(test, feature = "consistency_check"))]
    fn check_node(link: &Link<K, V>) -> usize {
        match link {
            None => 0,
            Some(node) => {
                let num_left = Self::check_node(&node.left);
                let num_right = Self::check_node(&node.right);
                let left_height = node.left_height();
                let right_height = node.right_height();

                // Check height
                assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

                // Check AVL condition (nearly balance)
                assert!(left_height <= right_height + 1);
                assert!(right_height <= left_height + 1);

                num_left + num_right + 1
            }
        }
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for AvlTreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for AvlTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.num_nodes)
    }
}
