//! An ordered set implemented with an AVL tree.

use std::fmt;
use std::iter::{FromIterator, FusedIterator, Rev};

use crate::compare::{Comparator, NaturalOrder};
use crate::iter::{IntoIter as MapIntoIter, Iter as MapIter, PreOrder};
use crate::map::AvlTreeMap;
use crate::node::Node;

/// An ordered set implemented with an AVL tree.
///
/// This is the unkeyed tree: each node stores a bare value.
///
/// ```
/// use avl_core::AvlTreeSet;
/// let mut set = AvlTreeSet::new();
/// set.insert(0);
/// set.insert(1);
/// set.insert(2);
/// assert_eq!(set.get(&1), Some(&1));
/// set.remove(&1);
/// assert!(set.get(&1).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTreeSet<T, C = NaturalOrder> {
    map: AvlTreeMap<T, (), C>,
}

/// An iterator over the values of a set.
pub struct Iter<'a, T> {
    map_iter: MapIter<'a, T, ()>,
}

/// An owning iterator over the values of a set.
pub struct IntoIter<T> {
    map_into_iter: MapIntoIter<T, ()>,
}

impl<T: Ord> AvlTreeSet<T> {
    /// Creates an empty set ordered by the natural ordering of `T`.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            map: AvlTreeMap::new(),
        }
    }
}

impl<T, C> AvlTreeSet<T, C> {
    /// Creates an empty set ordered by the given comparator.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            map: AvlTreeMap::with_comparator(cmp),
        }
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns the height of the tree, 0 for an empty set.
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Returns a read-only view of the root node, or `None` if the set is empty.
    pub fn root(&self) -> Option<&Node<T, ()>> {
        self.map.root()
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the smallest value in the set.
    pub fn first(&self) -> Option<&T> {
        self.map.first().map(|(k, _)| k)
    }

    /// Returns the largest value in the set.
    pub fn last(&self) -> Option<&T> {
        self.map.last().map(|(k, _)| k)
    }

    /// Gets an iterator over the values of the set in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            map_iter: self.map.iter(),
        }
    }

    /// Lazily yields all values in ascending order.
    pub fn in_order_traversal(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Lazily yields all values in descending order.
    pub fn reverse_in_order_traversal(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Lazily yields the nodes in pre-order.
    ///
    /// ```
    /// use avl_core::AvlTreeSet;
    /// let mut set = AvlTreeSet::new();
    /// for value in [10, 20, 30, 40, 50, 25] {
    ///     set.add(value);
    /// }
    /// let values: Vec<i32> = set.pre_order_traversal().map(|node| *node.key()).collect();
    /// assert_eq!(values, [30, 20, 10, 25, 40, 50]);
    /// ```
    pub fn pre_order_traversal(&self) -> PreOrder<'_, T, ()> {
        self.map.pre_order_traversal()
    }
}

impl<T, C: Comparator<T>> AvlTreeSet<T, C> {
    /// Adds a value and returns a view of the inserted node.
    /// Equal values already in the set are kept.
    pub fn add(&mut self, value: T) -> &Node<T, ()> {
        self.map.add(value, ())
    }

    /// Inserts a value into the set unless an equal value is already present.
    /// Returns whether the value was inserted.
    pub fn insert(&mut self, value: T) -> bool {
        if self.map.contains_key(&value) {
            return false;
        }
        self.map.add(value, ());
        true
    }

    /// Returns a reference to the value in the set that is equal to the given value.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.map.get_key_value(value).map(|(k, _)| k)
    }

    /// Returns true if the set contains a value.
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// Removes a value from the set.
    /// Removing a value that is not in the set does nothing.
    pub fn remove(&mut self, value: &T) -> &mut Self {
        self.map.remove(value);
        self
    }

    /// Removes a value from the set.
    /// Returns the value if it was previously in the set.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.map.remove_entry(value).map(|(k, _)| k)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.map.check_consistency()
    }
}

impl<T: Ord> Default for AvlTreeSet<T> {
    /// Creates an empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlTreeSet<T, C> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().for_each(move |value| {
            self.insert(value);
        });
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AvlTreeSet<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for AvlTreeSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_into_iter: self.map.into_iter(),
        }
    }
}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            map_iter: self.map_iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map_iter.next_back().map(|(k, _)| k)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.map_into_iter.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_into_iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
