use crate::index::{IndexType, NodeIndex};
use crate::interval::Interval;
use crate::node::Node;
use crate::tree::IntervalTree;

/// An iterator over the intervals of an `IntervalTree`, sorted by start.
#[derive(Debug, Clone)]
pub struct Iter<'a, T, Ix> {
    /// Stored nodes, without the sentinel
    nodes: std::slice::Iter<'a, Node<T, Ix>>,
}

impl<'a, T, Ix> Iter<'a, T, Ix> {
    pub(crate) fn new(nodes: &'a [Node<T, Ix>]) -> Self {
        Iter {
            nodes: nodes.iter(),
        }
    }
}

impl<'a, T, Ix> Iterator for Iter<'a, T, Ix>
where
    Ix: IndexType,
{
    type Item = &'a Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.find_map(Node::interval)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

/// A lazy intersection search over an `IntervalTree`. It yields the same
/// intervals in the same order as `IntervalTree::intersect`.
#[derive(Debug)]
pub struct Intersections<'a, T, Ix> {
    /// Reference to the tree
    tree_ref: &'a IntervalTree<T, Ix>,
    /// Nodes whose left subtree has been pushed but not yet reported
    stack: Vec<NodeIndex<Ix>>,
    /// Query interval
    target: &'a Interval<T>,
}

impl<'a, T, Ix> Intersections<'a, T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    pub(crate) fn new(tree_ref: &'a IntervalTree<T, Ix>, target: &'a Interval<T>) -> Self {
        let mut iter = Intersections {
            tree_ref,
            stack: Vec::new(),
            target,
        };
        iter.left_link(tree_ref.root);
        iter
    }

    /// Pushes the left spine of `x` to the stack, stopping at the first
    /// subtree that ends before the target starts.
    fn left_link(&mut self, mut x: NodeIndex<Ix>) {
        let tree_ref = self.tree_ref;
        while tree_ref.max(x).is_some_and(|max| max >= &self.target.start) {
            self.stack.push(x);
            x = tree_ref.node_ref(x, Node::left);
        }
    }
}

impl<T, Ix> Iterator for Intersections<'_, T, Ix>
where
    T: Ord + Clone,
    Ix: IndexType,
{
    type Item = Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree_ref = self.tree_ref;
        while let Some(x) = self.stack.pop() {
            let Some(interval) = tree_ref.node_ref(x, Node::interval) else {
                continue;
            };
            if interval.start <= self.target.end {
                self.left_link(tree_ref.node_ref(x, Node::right));
            }
            if let Some(common) = interval.intersection(self.target) {
                return Some(common);
            }
        }
        None
    }
}
