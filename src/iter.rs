use std::iter::FusedIterator;

use crate::interval::Interval;
use crate::intervalmap::IntervalMap;

/// An iterator over the segments of a `IntervalMap`, in ascending order.
///
/// The first item is always the segment unbounded below and the last one the segment
/// unbounded above; a map without boundaries yields a single unbounded segment.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    /// Reference to the map
    pub(crate) map_ref: &'a IntervalMap<K, V>,
    /// Index of the next segment from the front
    front: usize,
    /// One past the index of the next segment from the back
    back: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(map_ref: &'a IntervalMap<K, V>) -> Self {
        Iter {
            map_ref,
            front: 0,
            back: map_ref.segment_count(),
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            map_ref: self.map_ref,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (Interval<&'a K>, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let idx = self.front;
        self.front += 1;
        Some(self.map_ref.segment_at(idx))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.map_ref.segment_at(self.back))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
