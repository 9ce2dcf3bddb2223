//! The `Interval` yielded when walking an `IntervalMap` and represents [low, high)
//!
//! A missing end is unbounded: `low: None` reaches down to negative infinity and
//! `high: None` reaches up to positive infinity. Segments of a map are yielded in
//! ascending order, e.g. for a map with boundaries `[1, 10]`:
//! - (-inf, 1)
//! - [1, 10)
//! - [10, +inf)

use std::fmt;

/// A half-open interval [low, high) whose ends may be unbounded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Interval<T> {
    /// Low value, `None` when unbounded below
    pub low: Option<T>,
    /// High value, `None` when unbounded above
    pub high: Option<T>,
}

impl<T> Interval<T> {
    /// Create a new `Interval`
    ///
    /// # Panics
    ///
    /// This method panics when both ends are present and low >= high
    #[inline]
    pub fn new(low: Option<T>, high: Option<T>) -> Self
    where
        T: Ord,
    {
        if let (Some(low), Some(high)) = (&low, &high) {
            assert!(low < high, "invalid range");
        }
        Self { low, high }
    }

    /// The interval covering every key
    #[inline]
    #[must_use]
    pub fn full() -> Self {
        Self {
            low: None,
            high: None,
        }
    }

    /// Checks whether both ends are present
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.low.is_some() && self.high.is_some()
    }
}

impl<T: Ord> Interval<T> {
    /// Checks if `key` lies inside self
    #[inline]
    pub fn contains(&self, key: &T) -> bool {
        self.low.as_ref().map_or(true, |low| low <= key)
            && self.high.as_ref().map_or(true, |high| key < high)
    }
}

impl<T: Clone> Interval<&T> {
    /// Maps an `Interval<&T>` to an `Interval<T>` by cloning both ends
    #[inline]
    pub fn cloned(self) -> Interval<T> {
        Interval {
            low: self.low.cloned(),
            high: self.high.cloned(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.low {
            Some(low) => write!(f, "[{low}, ")?,
            None => f.write_str("(-inf, ")?,
        }
        match &self.high {
            Some(high) => write!(f, "{high})"),
            None => f.write_str("+inf)"),
        }
    }
}
