use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::iter::Iter;
use std::fmt;
use std::ops::{Add, Neg};
use tracing::{debug, trace};

/// A map that assigns a value to every key, stored as a sorted list of boundaries.
///
/// `values[0]` covers every key below the first boundary, `values[i + 1]` covers
/// `[boundaries[i], boundaries[i + 1])` and the last value covers everything from the
/// last boundary upwards. Two adjacent segments never hold equal values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalMap<K, V> {
    /// Strictly increasing left ends of the bounded-below segments
    pub(crate) boundaries: Vec<K>,
    /// Segment values, always one longer than `boundaries`
    pub(crate) values: Vec<V>,
}

impl<K, V> IntervalMap<K, V> {
    /// Create an `IntervalMap` mapping every key to `default`.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let map = IntervalMap::<i32, i32>::new(0);
    /// assert_eq!(map.get(&5), &0);
    /// assert!(map.is_uniform());
    /// ```
    #[inline]
    #[must_use]
    pub fn new(default: V) -> Self {
        Self::with_capacity(default, 0)
    }

    /// Creates a new `IntervalMap` with room for `capacity` boundaries.
    #[inline]
    #[must_use]
    pub fn with_capacity(default: V, capacity: usize) -> Self {
        let mut values = Vec::with_capacity(capacity + 1);
        values.push(default);
        IntervalMap {
            boundaries: Vec::with_capacity(capacity),
            values,
        }
    }

    /// Return the value of the segment reaching down to negative infinity.
    #[inline]
    pub fn default_value(&self) -> &V {
        &self.values[0]
    }

    /// Return the boundary keys in ascending order.
    #[inline]
    pub fn boundaries(&self) -> &[K] {
        &self.boundaries
    }

    /// Return the segment values in ascending order, starting with the default.
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Return the number of segments, which is always one more than the number of boundaries.
    #[inline]
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.values.len()
    }

    /// Return `true` if every key maps to the default value.
    #[inline]
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Remove all boundaries, keeping the current default value.
    #[inline]
    pub fn clear(&mut self) {
        self.boundaries.clear();
        self.values.truncate(1);
    }

    /// Get an iterator over the segments of the map in ascending order.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let map = IntervalMap::from_parts(0, [1, 10], [1, 10]).unwrap();
    /// let segments: Vec<_> = map
    ///     .iter()
    ///     .map(|(interval, value)| ((interval.low, interval.high), *value))
    ///     .collect();
    /// assert_eq!(
    ///     segments,
    ///     [
    ///         ((None, Some(&1)), 0),
    ///         ((Some(&1), Some(&10)), 1),
    ///         ((Some(&10), None), 10),
    ///     ]
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// The segment at position `idx`, counting the unbounded-below segment as 0.
    pub(crate) fn segment_at(&self, idx: usize) -> (Interval<&K>, &V) {
        let low = idx.checked_sub(1).map(|prev| &self.boundaries[prev]);
        let high = self.boundaries.get(idx);
        (Interval { low, high }, &self.values[idx])
    }
}

impl<K, V> Default for IntervalMap<K, V>
where
    V: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord,
{
    /// Return a reference to the value assigned to `key`.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let map = IntervalMap::from_parts(0, [1, 10], [1, 10]).unwrap();
    /// assert_eq!(map.get(&0), &0);
    /// assert_eq!(map.get(&9), &1);
    /// assert_eq!(map.get(&10), &10);
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> &V {
        &self.values[self.upper_bound(key)]
    }

    /// Return the segment containing `key` together with its value.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::{Interval, IntervalMap};
    ///
    /// let map = IntervalMap::from_parts(0, [1, 10], [1, 10]).unwrap();
    /// assert_eq!(map.segment(&4), (Interval::new(Some(&1), Some(&10)), &1));
    /// assert_eq!(map.segment(&-4), (Interval::new(None, Some(&1)), &0));
    /// ```
    #[inline]
    pub fn segment(&self, key: &K) -> (Interval<&K>, &V) {
        self.segment_at(self.upper_bound(key))
    }

    /// Number of boundaries less than or equal to `key`.
    fn upper_bound(&self, key: &K) -> usize {
        self.boundaries.partition_point(|b| b <= key)
    }

    /// Number of boundaries strictly less than `key`.
    fn lower_bound(&self, key: &K) -> usize {
        self.boundaries.partition_point(|b| b < key)
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord,
    V: PartialEq,
{
    /// Build an `IntervalMap` from a default value, ascending boundaries and one value per
    /// boundary. Boundaries whose value repeats the previous segment's value are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateBoundary`] if a boundary appears twice,
    /// [`Error::UnsortedBoundaries`] if the boundaries are not ascending and
    /// [`Error::LengthMismatch`] if the two lists have different lengths.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::{Error, IntervalMap};
    ///
    /// assert_eq!(IntervalMap::from_parts(0, [0], [0]), Ok(IntervalMap::new(0)));
    /// assert_eq!(
    ///     IntervalMap::from_parts(0, [2, 1], [1, 2]),
    ///     Err(Error::UnsortedBoundaries)
    /// );
    /// ```
    pub fn from_parts<B, I>(default: V, boundaries: B, values: I) -> Result<Self>
    where
        B: IntoIterator<Item = K>,
        I: IntoIterator<Item = V>,
    {
        let boundaries: Vec<K> = boundaries.into_iter().collect();
        let values: Vec<V> = values.into_iter().collect();
        if let Err(err) = Self::validate(&boundaries, &values) {
            debug!(%err, "rejecting interval map parts");
            return Err(err);
        }

        let mut map = Self::with_capacity(default, boundaries.len());
        for (key, value) in boundaries.into_iter().zip(values) {
            if map.values.last() != Some(&value) {
                map.boundaries.push(key);
                map.values.push(value);
            }
        }
        Ok(map)
    }

    fn validate(boundaries: &[K], values: &[V]) -> Result<()> {
        let mut sorted: Vec<&K> = boundaries.iter().collect();
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(Error::DuplicateBoundary);
        }
        if boundaries.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::UnsortedBoundaries);
        }
        if boundaries.len() != values.len() {
            return Err(Error::LengthMismatch {
                boundaries: boundaries.len(),
                values: values.len(),
            });
        }
        Ok(())
    }

    /// Assign `value` to every key from `key` up to the next boundary.
    ///
    /// Boundaries that end up separating equal values are removed.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::from_parts(0, [1, 10], [1, 10]).unwrap();
    /// map.set(5, 7);
    /// assert_eq!(map.boundaries(), &[1, 5, 10]);
    /// assert_eq!(map.values(), &[0, 1, 7, 10]);
    ///
    /// map.set(5, 1);
    /// assert_eq!(map.boundaries(), &[1, 10]);
    /// ```
    pub fn set(&mut self, key: K, value: V) {
        let idx = self.lower_bound(&key);
        if self.boundaries.get(idx) == Some(&key) {
            self.values[idx + 1] = value;
        } else if self.values[idx] == value {
            return;
        } else {
            trace!(idx, "inserting boundary");
            self.boundaries.insert(idx, key);
            self.values.insert(idx + 1, value);
        }
        self.coalesce_around(idx);
    }

    /// Remove `key` as a boundary, letting the preceding segment's value extend over it.
    /// Returns `false` without touching the map if `key` is not a boundary.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::from_parts(0, [1, 10], [1, 10]).unwrap();
    /// assert!(!map.unset(&5));
    /// assert!(map.unset(&10));
    /// assert_eq!(map.get(&20), &1);
    /// ```
    pub fn unset(&mut self, key: &K) -> bool {
        let idx = self.lower_bound(key);
        if self.boundaries.get(idx) != Some(key) {
            return false;
        }
        self.remove_boundary(idx);
        // the widened segment may now run into an equal neighbour
        if idx < self.boundaries.len() && self.values[idx + 1] == self.values[idx] {
            self.remove_boundary(idx);
        }
        true
    }

    /// Restore canonical form on both sides of the boundary at `idx`.
    fn coalesce_around(&mut self, idx: usize) {
        if idx + 1 < self.boundaries.len() && self.values[idx + 2] == self.values[idx + 1] {
            self.remove_boundary(idx + 1);
        }
        if self.values[idx + 1] == self.values[idx] {
            self.remove_boundary(idx);
        }
    }

    fn remove_boundary(&mut self, idx: usize) {
        trace!(idx, "removing boundary");
        let _ignore = self.boundaries.remove(idx);
        let _ignore = self.values.remove(idx + 1);
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord,
    V: Clone + PartialEq + Add<Output = V>,
{
    /// Add `summand` to the value of every key in `[start, end)`, or in `[start, +inf)`
    /// when `end` is `None`. An empty or inverted range leaves the map unchanged.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::from_parts(0, [1, 3, 5], [1, 0, 1]).unwrap();
    /// map.slice_add(2, Some(4), 1);
    /// assert_eq!(map.boundaries(), &[1, 2, 3, 4, 5]);
    /// assert_eq!(map.values(), &[0, 1, 2, 1, 0, 1]);
    ///
    /// map.slice_add(0, None, 1);
    /// assert_eq!(map.get(&-1), &0);
    /// assert_eq!(map.get(&100), &2);
    /// ```
    #[inline]
    pub fn slice_add(&mut self, start: K, end: Option<K>, summand: V) {
        self.shift_range(Some(start), end, &summand);
    }

    /// Add `summand` to every value of the map, the default included.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::from_parts(0, [1], [1]).unwrap();
    /// map.add_scalar(2);
    /// assert_eq!(map.values(), &[2, 3]);
    /// ```
    pub fn add_scalar(&mut self, summand: V) {
        trace!(segments = self.values.len(), "shifting every segment");
        for value in &mut self.values {
            *value = value.clone() + summand.clone();
        }
    }

    /// Add the value `other` assigns to each key onto the value `self` assigns to it.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::from_parts(0, [1, 10], [1, 10]).unwrap();
    /// let other = IntervalMap::from_parts(1, [5], [-1]).unwrap();
    /// map.add_map(&other);
    /// assert_eq!(map.boundaries(), &[1, 5, 10]);
    /// assert_eq!(map.values(), &[1, 2, 0, 9]);
    /// ```
    pub fn add_map(&mut self, other: &Self)
    where
        K: Clone,
    {
        for (interval, value) in other {
            let Interval { low, high } = interval.cloned();
            self.shift_range(low, high, value);
        }
    }

    /// Add `summand` over the range between `start` and `end`, either of which may be unbounded.
    fn shift_range(&mut self, start: Option<K>, end: Option<K>, summand: &V) {
        if let (Some(start), Some(end)) = (&start, &end) {
            if start >= end {
                return;
            }
        }

        // split first so the values past either end are pinned before shifting
        let first = start.map(|start| self.split_at(start));
        let bounded = end.is_some();
        let last = match end {
            Some(end) => self.split_at(end),
            None => self.boundaries.len(),
        };
        let from = first.map_or(0, |idx| idx + 1);
        trace!(from, last, "shifting segments");
        for value in &mut self.values[from..=last] {
            *value = value.clone() + summand.clone();
        }

        if bounded {
            self.coalesce_around(last);
        }
        if let Some(first) = first {
            self.coalesce_around(first);
        }
    }

    /// Make `key` a boundary without changing any value, returning its index.
    fn split_at(&mut self, key: K) -> usize {
        let idx = self.lower_bound(&key);
        if self.boundaries.get(idx) != Some(&key) {
            trace!(idx, "splitting segment");
            let value = self.values[idx].clone();
            self.boundaries.insert(idx, key);
            self.values.insert(idx + 1, value);
        }
        idx
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord,
    V: Clone + PartialEq + Add<Output = V> + Neg<Output = V>,
{
    /// Subtract `summand` from the value of every key in `[start, end)`, or in
    /// `[start, +inf)` when `end` is `None`.
    #[inline]
    pub fn slice_sub(&mut self, start: K, end: Option<K>, summand: V) {
        self.slice_add(start, end, -summand);
    }

    /// Subtract `summand` from every value of the map, the default included.
    #[inline]
    pub fn sub_scalar(&mut self, summand: V) {
        self.add_scalar(-summand);
    }

    /// Subtract the value `other` assigns to each key from the value `self` assigns to it.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::from_parts(0, [1, 10], [1, 10]).unwrap();
    /// let copy = map.clone();
    /// map.sub_map(&copy);
    /// assert_eq!(map, IntervalMap::new(0));
    /// ```
    #[inline]
    pub fn sub_map(&mut self, other: &Self)
    where
        K: Clone,
    {
        self.add_map(&other.negate());
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Clone,
    V: Clone + Neg<Output = V>,
{
    /// Return a copy of the map with every value negated, the default included.
    ///
    /// # Example
    /// ```rust
    /// use sparse_interval_map::IntervalMap;
    ///
    /// let map = IntervalMap::from_parts(1, [1, 10], [2, -3]).unwrap();
    /// let negated = map.negate();
    /// assert_eq!(negated.values(), &[-1, -2, 3]);
    /// assert_eq!(negated.negate(), map);
    /// ```
    #[must_use]
    pub fn negate(&self) -> Self {
        IntervalMap {
            boundaries: self.boundaries.clone(),
            values: self.values.iter().cloned().map(Neg::neg).collect(),
        }
    }
}

impl<K, V> fmt::Debug for IntervalMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(interval, value)| ((interval.low, interval.high), value)),
            )
            .finish()
    }
}

impl<'a, K, V> IntoIterator for &'a IntervalMap<K, V> {
    type Item = (Interval<&'a K>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
