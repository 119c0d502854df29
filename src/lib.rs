//! An ordered map and set implemented with an AVL tree.
//!
//! Keys are ordered by a [`Comparator`] held by each tree: [`NaturalOrder`]
//! for keys implementing [`Ord`], [`CompositeOrder`] for keys implementing the
//! narrow [`CompositeKey`] capability, or [`FnOrder`] for a closure.
//!
//! ```
//! use avl_core::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! for (key, value) in [(3, "c"), (1, "a"), (2, "b")] {
//!     map.add(key, value);
//! }
//! let ascending: Vec<_> = map.in_order_traversal().collect();
//! assert_eq!(ascending, [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
//! let descending: Vec<_> = map.reverse_in_order_traversal().map(|(k, _)| *k).collect();
//! assert_eq!(descending, [3, 2, 1]);
//! ```
//!
//! The tree-editing procedures themselves are available as free functions in
//! [`raw`], operating on owned subtrees.

mod compare;
pub mod iter;
pub mod map;
mod node;
pub mod raw;
pub mod set;

pub use compare::{Comparator, CompositeKey, CompositeOrder, FnOrder, NaturalOrder};
pub use map::AvlTreeMap;
pub use node::Node;
pub use set::AvlTreeSet;
