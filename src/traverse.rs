//! Shape introspection over any tree that can name its root, the children of
//! a node and the value held by a node.
//!
//! Nothing here takes part in building or querying; the adapters only read
//! through [`TreeShape`].

use std::fmt;

use crate::index::{IndexType, NodeIndex};
use crate::interval::Interval;
use crate::tree::IntervalTree;

/// Read-only access to the structure of a binary interval tree.
pub trait TreeShape {
    /// Bound type of the stored intervals
    type Bound;
    /// Handle identifying one node
    type Index: Copy;

    /// The root node, `None` for an empty tree.
    fn root(&self) -> Option<Self::Index>;

    /// Left and right children of `node`.
    fn children(&self, node: Self::Index) -> (Option<Self::Index>, Option<Self::Index>);

    /// The interval held by `node` and the largest end in its subtree.
    fn value(&self, node: Self::Index) -> Option<(&Interval<Self::Bound>, &Self::Bound)>;
}

impl<T, Ix> TreeShape for IntervalTree<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    type Bound = T;
    type Index = NodeIndex<Ix>;

    #[inline]
    fn root(&self) -> Option<Self::Index> {
        IntervalTree::root(self)
    }

    #[inline]
    fn children(&self, node: Self::Index) -> (Option<Self::Index>, Option<Self::Index>) {
        IntervalTree::children(self, node)
    }

    #[inline]
    fn value(&self, node: Self::Index) -> Option<(&Interval<T>, &T)> {
        self.get(node).zip(self.max_end(node))
    }
}

/// Number of nodes reachable from the root.
pub fn node_count<S: TreeShape>(shape: &S) -> usize {
    pre_order(shape).count()
}

/// Number of levels on the longest root-to-leaf path, 0 for an empty tree.
pub fn height<S: TreeShape>(shape: &S) -> usize {
    fn height_inner<S: TreeShape>(shape: &S, x: Option<S::Index>) -> usize {
        x.map_or(0, |x| {
            let (left, right) = shape.children(x);
            1 + height_inner(shape, left).max(height_inner(shape, right))
        })
    }
    height_inner(shape, shape.root())
}

/// Number of leaves, i.e. nodes without children.
pub fn breadth<S: TreeShape>(shape: &S) -> usize {
    pre_order(shape)
        .filter(|&x| matches!(shape.children(x), (None, None)))
        .count()
}

/// Walk nodes parent first, then the left subtree, then the right subtree.
pub fn pre_order<S: TreeShape>(shape: &S) -> PreOrder<'_, S> {
    PreOrder {
        shape,
        stack: shape.root().into_iter().collect(),
    }
}

/// Walk nodes left subtree first, then the right subtree, then the parent.
pub fn post_order<S: TreeShape>(shape: &S) -> PostOrder<'_, S> {
    PostOrder {
        shape,
        stack: shape.root().map(|x| (x, false)).into_iter().collect(),
    }
}

/// Parent-first iterator returned by [`pre_order`].
pub struct PreOrder<'a, S: TreeShape> {
    shape: &'a S,
    stack: Vec<S::Index>,
}

impl<S: TreeShape> Iterator for PreOrder<'_, S> {
    type Item = S::Index;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        let (left, right) = self.shape.children(x);
        self.stack.extend(right);
        self.stack.extend(left);
        Some(x)
    }
}

/// Children-first iterator returned by [`post_order`].
pub struct PostOrder<'a, S: TreeShape> {
    shape: &'a S,
    /// Each entry records whether its children are already on the stack
    stack: Vec<(S::Index, bool)>,
}

impl<S: TreeShape> Iterator for PostOrder<'_, S> {
    type Item = S::Index;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((x, expanded)) = self.stack.pop() {
            if expanded {
                return Some(x);
            }
            self.stack.push((x, true));
            let (left, right) = self.shape.children(x);
            self.stack.extend(right.map(|r| (r, false)));
            self.stack.extend(left.map(|l| (l, false)));
        }
        None
    }
}

/// Renders one node per line as `[start, end] max=m`, indented two spaces per
/// level, left child before right child.
///
/// # Example
/// ```rust
/// use static_interval_tree::{traverse::Pretty, IntervalTree};
///
/// let tree = IntervalTree::<i32>::from_bounds([(1, 2), (3, 9), (5, 6)]).unwrap();
/// assert_eq!(
///     Pretty(&tree).to_string(),
///     "[3, 9] max=9\n  [1, 2] max=2\n  [5, 6] max=6\n"
/// );
/// ```
pub struct Pretty<'a, S>(pub &'a S);

impl<S> fmt::Display for Pretty<'_, S>
where
    S: TreeShape,
    S::Bound: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.0;
        let Some(root) = shape.root() else {
            return writeln!(f, "(empty)");
        };
        let mut stack = vec![(root, 0_usize)];
        while let Some((x, depth)) = stack.pop() {
            if let Some((interval, max)) = shape.value(x) {
                writeln!(
                    f,
                    "{:indent$}[{}, {}] max={}",
                    "",
                    interval.start,
                    interval.end,
                    max,
                    indent = depth * 2
                )?;
            }
            let (left, right) = shape.children(x);
            stack.extend(right.map(|r| (r, depth + 1)));
            stack.extend(left.map(|l| (l, depth + 1)));
        }
        Ok(())
    }
}
