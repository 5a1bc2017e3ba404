//! The `Interval` stored in `IntervalTree` and represents the closed interval [start, end]
//!
//! Both bounds are inclusive, so `[3, 3]` is a valid single-point interval and
//! `[1, 4]` overlaps `[4, 9]`. An interval with `start > end` cannot be built:
//! `Interval::new` panics on it and `Interval::try_new` reports it as an error.

use crate::error::{Error, Result};

/// The interval stored in `IntervalTree` represents [start, end]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Interval<T> {
    /// Start value
    pub start: T,
    /// End value
    pub end: T,
}

impl<T: Ord> Interval<T> {
    /// Create a new `Interval`
    ///
    /// # Panics
    ///
    /// This method panics when start > end
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(start <= end, "invalid range");
        Self { start, end }
    }

    /// Create a new `Interval`, rejecting start > end
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInterval` when start > end
    #[inline]
    pub fn try_new(start: T, end: T) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidInterval);
        }
        Ok(Self { start, end })
    }

    /// Create the single-point interval [x, x]
    #[inline]
    pub fn point(x: T) -> Self
    where
        T: Clone,
    {
        Self {
            start: x.clone(),
            end: x,
        }
    }

    /// Checks if self overlaps with other interval
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The common part of two intervals, `None` when they are disjoint
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self>
    where
        T: Clone,
    {
        self.overlaps(other).then(|| Self {
            start: (&self.start).max(&other.start).clone(),
            end: (&self.end).min(&other.end).clone(),
        })
    }
}

impl<T: Ord> TryFrom<(T, T)> for Interval<T> {
    type Error = Error;

    #[inline]
    fn try_from((start, end): (T, T)) -> Result<Self> {
        Self::try_new(start, end)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[should_panic(expected = "invalid range")]
    fn invalid_range_should_panic() {
        let _interval = Interval::new(3, 1);
    }

    #[test]
    fn invalid_range_is_an_error() {
        assert!(matches!(
            Interval::try_new(3, 1),
            Err(Error::InvalidInterval)
        ));
        assert!(Interval::<i32>::try_from((5, 2)).is_err());
        assert_eq!(Interval::try_from((2, 5)).ok(), Some(Interval::new(2, 5)));
    }

    #[test]
    fn closed_bounds_overlap() {
        let a = Interval::new(1, 4);
        assert!(a.overlaps(&Interval::new(4, 9)));
        assert!(a.overlaps(&Interval::point(1)));
        assert!(!a.overlaps(&Interval::new(5, 9)));
        assert!(!Interval::new(10, 20).overlaps(&Interval::new(0, 9)));
    }

    #[test]
    fn intersection_is_the_common_part() {
        let a = Interval::new(3, 40);
        assert_eq!(a.intersection(&Interval::new(40, 59)), Some(Interval::point(40)));
        assert_eq!(
            Interval::new(29, 98).intersection(&Interval::new(40, 59)),
            Some(Interval::new(40, 59))
        );
        assert_eq!(a.intersection(&Interval::new(41, 59)), None);
        assert_eq!(a.intersection(&a), Some(a));
    }
}
