//! Key ordering used by the tree.
//!
//! Every tree holds a [`Comparator`] and consults it for each descent step.
//! The three-way result is a plain [`Ordering`]: `Less` sends a key to the
//! left subtree, `Equal` and `Greater` send it to the right.

use std::cmp::Ordering;
use std::fmt;

/// Three-way comparison between two keys of the same type.
///
/// Implementations must be total and consistent (antisymmetric, transitive).
/// An inconsistent comparator does not cause memory unsafety, but the tree's
/// ordering guarantees no longer hold.
pub trait Comparator<K> {
    /// Compares `lhs` against `rhs`.
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering;
}

/// Natural ordering of keys that implement [`Ord`], such as integers and strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// A key type that knows how to compare itself against another key of the same type.
///
/// This is the narrow capability for composite keys: a single three-way
/// comparison, without requiring the full `PartialEq`/`Eq`/`PartialOrd`/`Ord` set.
///
/// ```
/// use std::cmp::Ordering;
/// use avl_core::{AvlTreeMap, CompositeKey, CompositeOrder};
///
/// struct Version {
///     major: u32,
///     minor: u32,
/// }
///
/// impl CompositeKey for Version {
///     fn compare_to(&self, other: &Self) -> Ordering {
///         self.major
///             .cmp(&other.major)
///             .then(self.minor.cmp(&other.minor))
///     }
/// }
///
/// let mut map = AvlTreeMap::with_comparator(CompositeOrder);
/// map.add(Version { major: 1, minor: 2 }, "b");
/// map.add(Version { major: 1, minor: 0 }, "a");
/// let values: Vec<_> = map.values().copied().collect();
/// assert_eq!(values, ["a", "b"]);
/// ```
pub trait CompositeKey {
    /// Compares `self` against `other`.
    fn compare_to(&self, other: &Self) -> Ordering;
}

/// Ordering that delegates to [`CompositeKey::compare_to`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompositeOrder;

impl<K: CompositeKey> Comparator<K> for CompositeOrder {
    #[inline]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.compare_to(rhs)
    }
}

/// Ordering given by a closure.
///
/// ```
/// use avl_core::{AvlTreeSet, FnOrder};
///
/// let mut set = AvlTreeSet::with_comparator(FnOrder::new(|a: &i32, b: &i32| b.cmp(a)));
/// set.extend([1, 3, 2]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F> {
    f: F,
}

impl<F> FnOrder<F> {
    /// Wraps a three-way comparison closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<K, F> Comparator<K> for FnOrder<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        (self.f)(lhs, rhs)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOrder").finish_non_exhaustive()
    }
}

impl<K, C: Comparator<K>> Comparator<K> for &C {
    #[inline]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Employee {
        id: u32,
        name: &'static str,
    }

    impl CompositeKey for Employee {
        fn compare_to(&self, other: &Self) -> Ordering {
            self.id.cmp(&other.id).then_with(|| self.name.cmp(other.name))
        }
    }

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(
            NaturalOrder.compare(&String::from("x"), &String::from("x")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_composite_order() {
        let a = Employee { id: 1, name: "bob" };
        let b = Employee { id: 1, name: "alice" };
        let c = Employee { id: 0, name: "zed" };
        assert_eq!(CompositeOrder.compare(&a, &b), Ordering::Greater);
        assert_eq!(CompositeOrder.compare(&c, &a), Ordering::Less);
        assert_eq!(CompositeOrder.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_fn_order() {
        let by_len = FnOrder::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        assert_eq!(by_len.compare(&"aa", &"b"), Ordering::Greater);
        assert_eq!((&by_len).compare(&"aa", &"bb"), Ordering::Equal);
    }
}
