//! `static_interval_tree` is an immutable interval tree for coverage-style queries.
//!
//! The tree is built once from a fixed list of closed intervals `[start, end]`
//! and answers "which stored intervals intersect this one" in roughly
//! O(logN + k) time, where k is the number of matches.
//!
//! Like other arena based trees, `static_interval_tree` keeps every node in one
//! vector and refers to children by index. Intervals are sorted by start, and the
//! subtree over any index range is rooted at the range's rounded-up median, so the
//! tree is perfectly balanced. Each node also records which node of its subtree
//! has the largest end, allowing a query to skip whole subtrees.
//!
//! Since nothing is mutated after construction, `IntervalTree` is `Send` and
//! `Sync` and may be queried from many threads at once.
//!
//! # Example
//!
//! ```rust
//! use static_interval_tree::{Interval, IntervalTree};
//!
//! let tree = IntervalTree::<i64>::from_bounds([(0, 0), (3, 40), (10, 14), (20, 35), (29, 98)])
//!     .unwrap();
//! let hits = tree.intersect(&Interval::new(40, 59));
//! assert_eq!(hits, vec![Interval::new(40, 40), Interval::new(40, 59)]);
//! ```
//!

#[cfg(feature = "graphviz")]
pub mod draw;
mod error;
mod index;
mod interval;
mod iter;
mod node;
pub mod traverse;
mod tree;


pub use error::{Error, Result};
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use interval::Interval;
pub use iter::{Intersections, Iter};
pub use traverse::TreeShape;
pub use tree::IntervalTree;
