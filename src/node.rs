use crate::index::{IndexType, NodeIndex};
use crate::interval::Interval;

/// Node of the interval tree
#[derive(Debug, Clone)]
pub struct Node<T, Ix> {
    /// Left children
    pub left: NodeIndex<Ix>,
    /// Right children
    pub right: NodeIndex<Ix>,

    /// Interval of the node, `None` only for the sentinel
    pub interval: Option<Interval<T>>,
    /// The index that point to the node with the max end in this subtree
    pub max_index: NodeIndex<Ix>,
}

// Convenient getter/setter methods
impl<T, Ix> Node<T, Ix>
where
    Ix: IndexType,
{
    /// The node stored at index 0, standing for every absent child.
    pub fn sentinel() -> Self {
        Node {
            left: NodeIndex::sentinel(),
            right: NodeIndex::sentinel(),
            interval: None,
            max_index: NodeIndex::sentinel(),
        }
    }

    /// A childless node stored at `index`, its own subtree maximum.
    pub fn leaf(interval: Interval<T>, index: NodeIndex<Ix>) -> Self {
        Node {
            left: NodeIndex::sentinel(),
            right: NodeIndex::sentinel(),
            interval: Some(interval),
            max_index: index,
        }
    }

    pub fn interval(&self) -> Option<&Interval<T>> {
        self.interval.as_ref()
    }

    pub fn max_index(&self) -> NodeIndex<Ix> {
        self.max_index
    }

    pub fn left(&self) -> NodeIndex<Ix> {
        self.left
    }

    pub fn right(&self) -> NodeIndex<Ix> {
        self.right
    }

    pub fn set_max_index(max_index: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.max_index = max_index;
        }
    }

    pub fn set_children(
        left: NodeIndex<Ix>,
        right: NodeIndex<Ix>,
    ) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.left = left;
            node.right = right;
        }
    }
}
