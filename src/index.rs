use std::fmt;
use std::hash::Hash;

pub type DefaultIx = u32;

/// Integer type used to address nodes in the arena.
///
/// # Safety
///
/// `index(new(x)) == x` must hold for every `x <= max().index()`.
pub unsafe trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

unsafe impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

unsafe impl IndexType for usize {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self
    }
    #[inline(always)]
    fn max() -> Self {
        usize::MAX
    }
}

/// Node identifier.
///
/// Stored intervals occupy `1..=len`; index `0` is the sentinel and stands for
/// an absent child or an empty tree.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn sentinel() -> Self {
        NodeIndex::new(0)
    }

    #[inline]
    pub fn is_sentinel(self) -> bool {
        self.index() == 0
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    pub fn present(self) -> Option<Self> {
        (!self.is_sentinel()).then_some(self)
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}

/// Largest number of intervals an arena addressed by `Ix` can hold.
///
/// Index `0` is taken by the sentinel and `Ix::max()` is never handed out.
#[inline]
pub(crate) fn capacity<Ix: IndexType>() -> usize {
    <Ix as IndexType>::max().index().saturating_sub(1)
}

/// Rounded-up midpoint of the non-empty range `[lo, hi]`.
///
/// An even-length range routes its extra element to the right half.
#[inline]
pub(crate) fn median(lo: usize, hi: usize) -> usize {
    debug_assert!(lo <= hi, "median of an empty range");
    lo + (hi - lo + 1) / 2
}

/// A contiguous, one-based range of node indices that forms one subtree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct IndexRange {
    pub(crate) lo: usize,
    pub(crate) hi: usize,
}

impl IndexRange {
    /// Create the range `[lo, hi]` inside an arena holding `len` intervals.
    ///
    /// An empty range (`lo > hi`) is always accepted.
    ///
    /// # Panics
    ///
    /// This method panics when a non-empty range leaves `1..=len`
    #[inline]
    pub(crate) fn new(lo: usize, hi: usize, len: usize) -> Self {
        assert!(
            lo > hi || (lo >= 1 && hi <= len),
            "index range out of bounds"
        );
        Self { lo, hi }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Split into `(left, median, right)`, or `None` when empty.
    #[inline]
    pub(crate) fn split(&self, len: usize) -> Option<(Self, usize, Self)> {
        if self.is_empty() {
            return None;
        }
        let mid = median(self.lo, self.hi);
        Some((
            Self::new(self.lo, mid - 1, len),
            mid,
            Self::new(mid + 1, self.hi, len),
        ))
    }
}

/// Number of levels in a median-split tree over `len` elements.
#[inline]
pub(crate) fn balanced_height(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn median_rounds_up() {
        assert_eq!(median(1, 1), 1);
        assert_eq!(median(1, 2), 2);
        assert_eq!(median(1, 4), 3);
        assert_eq!(median(1, 5), 3);
        assert_eq!(median(4, 5), 5);
        assert_eq!(median(usize::MAX - 1, usize::MAX), usize::MAX);
    }

    #[test]
    fn split_partitions_the_range() {
        let (left, mid, right) = IndexRange::new(1, 5, 5).split(5).unwrap();
        assert_eq!(mid, 3);
        assert_eq!(left, IndexRange { lo: 1, hi: 2 });
        assert_eq!(right, IndexRange { lo: 4, hi: 5 });
        assert!(IndexRange::new(1, 0, 5).split(5).is_none());
    }

    #[test]
    #[should_panic(expected = "index range out of bounds")]
    fn range_outside_arena_should_panic() {
        let _range = IndexRange::new(2, 6, 5);
    }

    #[test]
    #[should_panic(expected = "index range out of bounds")]
    fn range_touching_sentinel_should_panic() {
        let _range = IndexRange::new(0, 3, 5);
    }

    #[test]
    fn balanced_height_is_ceil_log2() {
        assert_eq!(balanced_height(0), 0);
        assert_eq!(balanced_height(1), 1);
        assert_eq!(balanced_height(2), 2);
        assert_eq!(balanced_height(3), 2);
        assert_eq!(balanced_height(4), 3);
        assert_eq!(balanced_height(7), 3);
        assert_eq!(balanced_height(8), 4);
    }

    #[test]
    fn sentinel_is_absent() {
        assert!(NodeIndex::<u32>::sentinel().present().is_none());
        assert_eq!(NodeIndex::<u32>::new(4).present(), Some(NodeIndex::new(4)));
        assert_eq!(capacity::<u32>(), u32::MAX as usize - 1);
    }
}
