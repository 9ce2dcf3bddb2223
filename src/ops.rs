//! Arithmetic operators over whole maps. Every operator acts pointwise, default included.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::intervalmap::IntervalMap;

impl<K, V> Neg for IntervalMap<K, V>
where
    V: Neg<Output = V>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        IntervalMap {
            boundaries: self.boundaries,
            values: self.values.into_iter().map(Neg::neg).collect(),
        }
    }
}

impl<K, V> Neg for &IntervalMap<K, V>
where
    K: Clone,
    V: Clone + Neg<Output = V>,
{
    type Output = IntervalMap<K, V>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<K, V> AddAssign<&IntervalMap<K, V>> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Clone + PartialEq + Add<Output = V>,
{
    #[inline]
    fn add_assign(&mut self, rhs: &IntervalMap<K, V>) {
        self.add_map(rhs);
    }
}

impl<K, V> SubAssign<&IntervalMap<K, V>> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Clone + PartialEq + Add<Output = V> + Neg<Output = V>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: &IntervalMap<K, V>) {
        self.sub_map(rhs);
    }
}

impl<K, V> Add<&IntervalMap<K, V>> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Clone + PartialEq + Add<Output = V>,
{
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &IntervalMap<K, V>) -> Self::Output {
        self.add_map(rhs);
        self
    }
}

impl<K, V> Sub<&IntervalMap<K, V>> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Clone + PartialEq + Add<Output = V> + Neg<Output = V>,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: &IntervalMap<K, V>) -> Self::Output {
        self.sub_map(rhs);
        self
    }
}
