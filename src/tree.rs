use crate::error::{Error, Result};
use crate::index::{balanced_height, capacity, DefaultIx, IndexRange, IndexType, NodeIndex};
use crate::interval::Interval;
use crate::iter::{Intersections, Iter};
use crate::node::Node;
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// An immutable interval tree over closed intervals.
///
/// Intervals are sorted by start and stored in one arena at indices `1..=len`.
/// The subtree over any index range `[lo, hi]` is rooted at the rounded-up
/// median of the range, so the tree shape is a pure function of `len`. Every
/// node remembers which node of its subtree has the largest end, letting
/// queries skip subtrees that end before the target starts.
///
/// The tree is never modified after it is built; any number of threads may
/// query it at once.
#[derive(Debug, Clone)]
pub struct IntervalTree<T, Ix = DefaultIx> {
    /// Vector that stores nodes, with the sentinel at index 0
    pub(crate) nodes: Vec<Node<T, Ix>>,
    /// Root of the interval tree
    pub(crate) root: NodeIndex<Ix>,
}

impl<T, Ix> IntervalTree<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    /// Build a tree from intervals in any order. Duplicates are kept as
    /// distinct nodes.
    ///
    /// The whole input is rejected if any interval has `start > end`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBounds` with the position of the first inverted
    /// interval, or `Error::CapacityExceeded` when the input does not fit into `Ix`
    ///
    /// # Example
    /// ```rust
    /// use static_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree: IntervalTree<i32> = IntervalTree::build([
    ///     Interval::new(20, 35),
    ///     Interval::new(0, 0),
    ///     Interval::new(10, 14),
    /// ])
    /// .unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.max_end(tree.root().unwrap()), Some(&35));
    /// ```
    #[inline]
    pub fn build<I>(intervals: I) -> Result<Self>
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut intervals: Vec<_> = intervals.into_iter().collect();
        if let Some(position) = intervals.iter().position(|i| i.start > i.end) {
            debug!(position, "rejected inverted interval");
            return Err(Error::InvalidBounds { position });
        }
        let len = intervals.len();
        let max = capacity::<Ix>();
        if len > max {
            return Err(Error::CapacityExceeded { len, max });
        }
        intervals.sort_by(|a, b| a.start.cmp(&b.start));

        let mut nodes = Vec::with_capacity(len + 1);
        nodes.push(Node::sentinel());
        nodes.extend(
            intervals
                .into_iter()
                .enumerate()
                .map(|(i, interval)| Node::leaf(interval, NodeIndex::new(i + 1))),
        );
        let mut tree = IntervalTree {
            nodes,
            root: NodeIndex::sentinel(),
        };
        tree.root = tree.link(IndexRange::new(1, len, len));

        debug!(
            len,
            root = tree.root.index(),
            height = tree.height(),
            "built interval tree"
        );
        Ok(tree)
    }

    /// Build a tree from `(start, end)` pairs.
    ///
    /// The whole input is rejected if any pair has `start > end`; no partial
    /// tree is produced.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBounds` with the position of the first bad pair,
    /// or `Error::CapacityExceeded` when the input does not fit into `Ix`
    ///
    /// # Example
    /// ```rust
    /// use static_interval_tree::{Error, IntervalTree};
    ///
    /// let tree = IntervalTree::<u64>::from_bounds([(5, 10), (1, 2)]).unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// let err = IntervalTree::<u64>::from_bounds([(5, 10), (9, 2)]).unwrap_err();
    /// assert_eq!(err, Error::InvalidBounds { position: 1 });
    /// ```
    #[inline]
    pub fn from_bounds<I>(bounds: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let intervals = bounds
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                Interval::try_new(start, end).map_err(|_| Error::InvalidBounds { position })
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| debug!(%err, "rejected interval input"))?;
        Self::build(intervals)
    }

    /// Find the intersections of `target` with every stored interval that
    /// overlaps it.
    ///
    /// Matches come out in tree order: left subtree, node, right subtree.
    ///
    /// # Example
    /// ```rust
    /// use static_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::<i32>::from_bounds([(0, 0), (3, 40), (10, 14), (20, 35), (29, 98)])
    ///     .unwrap();
    /// assert_eq!(
    ///     tree.intersect(&Interval::new(40, 59)),
    ///     vec![Interval::new(40, 40), Interval::new(40, 59)]
    /// );
    /// ```
    #[inline]
    pub fn intersect(&self, target: &Interval<T>) -> Vec<Interval<T>>
    where
        T: Clone,
    {
        let mut list = Vec::new();
        self.intersect_into(target, &mut list);
        list
    }

    /// Same as [`IntervalTree::intersect`], appending to `list` instead of
    /// allocating. Existing contents of `list` are left in place.
    ///
    /// # Example
    /// ```rust
    /// use static_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::<i32>::from_bounds([(5, 10)]).unwrap();
    /// let mut list = vec![Interval::new(-1, -1)];
    /// tree.intersect_into(&Interval::new(10, 20), &mut list);
    /// assert_eq!(list, vec![Interval::new(-1, -1), Interval::new(10, 10)]);
    /// ```
    #[inline]
    pub fn intersect_into(&self, target: &Interval<T>, list: &mut Vec<Interval<T>>)
    where
        T: Clone,
    {
        let _ignore = self.visit_overlaps(self.root, target, &mut |interval| {
            list.extend(interval.intersection(target));
            ControlFlow::Continue(())
        });
    }

    /// Lazily yield the same sequence as [`IntervalTree::intersect`].
    #[inline]
    #[must_use]
    pub fn intersections<'a>(&'a self, target: &'a Interval<T>) -> Intersections<'a, T, Ix> {
        Intersections::new(self, target)
    }

    /// Find all stored intervals that overlap with the given interval, in the
    /// same order as [`IntervalTree::intersect`].
    ///
    /// # Example
    /// ```rust
    /// use static_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::<i32>::from_bounds([(1, 3), (2, 4), (6, 7), (7, 11)]).unwrap();
    /// assert_eq!(tree.find_all_overlap(&Interval::new(3, 6)).len(), 3);
    /// ```
    #[inline]
    pub fn find_all_overlap(&self, target: &Interval<T>) -> Vec<&Interval<T>> {
        let mut list = Vec::new();
        let _ignore = self.visit_overlaps(self.root, target, &mut |interval| {
            list.push(interval);
            ControlFlow::Continue(())
        });
        list
    }

    /// Check if an interval in the tree overlaps with the given interval.
    ///
    /// # Example
    /// ```rust
    /// use static_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::<i32>::from_bounds([(1, 3), (6, 7), (9, 11)]).unwrap();
    /// assert!(tree.overlaps(&Interval::new(3, 5)));
    /// assert!(tree.overlaps(&Interval::new(11, 17)));
    /// assert!(!tree.overlaps(&Interval::new(4, 5)));
    /// assert!(!tree.overlaps(&Interval::new(12, 23)));
    /// ```
    #[inline]
    pub fn overlaps(&self, target: &Interval<T>) -> bool {
        self.visit_overlaps(self.root, target, &mut |_| ControlFlow::Break(()))
            .is_break()
    }

    /// Count the stored intervals that overlap with the given interval.
    #[inline]
    pub fn count_overlaps(&self, target: &Interval<T>) -> usize {
        let mut count = 0;
        let _ignore = self.visit_overlaps(self.root, target, &mut |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        count
    }

    /// Get an iterator over the stored intervals, sorted by start.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, Ix> {
        Iter::new(&self.nodes[1..])
    }

    /// Index of the root node, `None` for an empty tree.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeIndex<Ix>> {
        self.root.present()
    }

    /// The interval stored at `node`.
    #[inline]
    pub fn get(&self, node: NodeIndex<Ix>) -> Option<&Interval<T>> {
        self.nodes.get(node.index()).and_then(Node::interval)
    }

    /// The largest end in the subtree rooted at `node`.
    #[inline]
    pub fn max_end(&self, node: NodeIndex<Ix>) -> Option<&T> {
        let max_index = self.nodes.get(node.index())?.max_index();
        self.nodes[max_index.index()].interval().map(|i| &i.end)
    }

    /// Left and right children of `node`, each `None` when absent.
    #[inline]
    pub fn children(&self, node: NodeIndex<Ix>) -> (Option<NodeIndex<Ix>>, Option<NodeIndex<Ix>>) {
        self.nodes
            .get(node.index())
            .map_or((None, None), |n| (n.left().present(), n.right().present()))
    }

    /// Number of levels in the tree, 0 when empty.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        balanced_height(self.len())
    }

    /// Return the number of stored intervals.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Return `true` if the tree stores no intervals.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, Ix> Default for IntervalTree<T, Ix>
where
    Ix: IndexType,
{
    #[inline]
    fn default() -> Self {
        IntervalTree {
            nodes: vec![Node::sentinel()],
            root: NodeIndex::sentinel(),
        }
    }
}

impl<T, Ix> FromIterator<Interval<T>> for IntervalTree<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    /// # Panics
    ///
    /// This method panics when an interval has `start > end` or the input
    /// does not fit into `Ix`
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        match Self::build(iter) {
            Ok(tree) => tree,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T, Ix> IntoIterator for &'a IntervalTree<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    type Item = &'a Interval<T>;
    type IntoIter = Iter<'a, T, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, Ix> IntervalTree<T, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    /// Link the nodes of `range` into a balanced subtree and return its root.
    fn link(&mut self, range: IndexRange) -> NodeIndex<Ix> {
        let Some((left, mid, right)) = range.split(self.len()) else {
            return NodeIndex::sentinel();
        };
        let x = NodeIndex::new(mid);
        let x_left = self.link(left);
        let x_right = self.link(right);
        self.node_mut(x, Node::set_children(x_left, x_right));
        self.recalculate_max(x);
        trace!(lo = range.lo, hi = range.hi, root = mid, "linked subtree");
        x
    }

    /// Recalculate max value from left and right children
    fn recalculate_max(&mut self, x: NodeIndex<Ix>) {
        self.node_mut(x, Node::set_max_index(x));
        let x_left = self.node_ref(x, Node::left);
        let x_right = self.node_ref(x, Node::right);
        if self.max(x_left) > self.max(x) {
            self.node_mut(
                x,
                Node::set_max_index(self.node_ref(x_left, Node::max_index)),
            );
        }
        if self.max(x_right) > self.max(x) {
            self.node_mut(
                x,
                Node::set_max_index(self.node_ref(x_right, Node::max_index)),
            );
        }
    }

    /// Visit every stored interval overlapping `target` in tree order,
    /// stopping early when `op` breaks.
    ///
    /// A subtree is skipped when its max end is before the target start. The
    /// right subtree is also skipped when the target ends before the node
    /// starts, since everything there starts no earlier than the node.
    fn visit_overlaps<'a, F>(
        &'a self,
        x: NodeIndex<Ix>,
        target: &Interval<T>,
        op: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&'a Interval<T>) -> ControlFlow<()>,
    {
        let Some(interval) = self.node_ref(x, Node::interval) else {
            return ControlFlow::Continue(());
        };
        if self.max(x) < Some(&target.start) {
            return ControlFlow::Continue(());
        }
        self.visit_overlaps(self.node_ref(x, Node::left), target, op)?;
        if interval.overlaps(target) {
            op(interval)?;
        }
        if interval.start <= target.end {
            self.visit_overlaps(self.node_ref(x, Node::right), target, op)?;
        }
        ControlFlow::Continue(())
    }
}

// Convenient methods for reference or mutate a node
impl<T, Ix> IntervalTree<T, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<'a, F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    fn node_mut<'a, F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    /// The largest end in the subtree of `node`, `None` for the sentinel.
    pub(crate) fn max(&self, node: NodeIndex<Ix>) -> Option<&T> {
        let max_index = self.nodes[node.index()].max_index().index();
        self.nodes[max_index].interval().map(|i| &i.end)
    }
}
