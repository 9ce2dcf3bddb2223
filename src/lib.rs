//! `sparse_interval_map` is a map that assigns a value to every key of an ordered domain.
//!
//! The map starts out as a single default value covering all keys. Values are changed on
//! half-open ranges `[start, end)`, either by assigning from a point onwards with
//! [`IntervalMap::set`] or by adding to a range with [`IntervalMap::slice_add`].
//!
//! Internally the map only stores the keys where the value changes (the *boundaries*) and
//! one value per segment between them. Adjacent segments never hold equal values: every
//! mutation coalesces them, so two maps describing the same assignment are always
//! structurally equal.
//!
//! # Example
//!
//! ```rust
//! use sparse_interval_map::IntervalMap;
//!
//! let mut map = IntervalMap::new(0);
//! map.slice_add(2, Some(4), 1);
//! assert_eq!(map.get(&1), &0);
//! assert_eq!(map.get(&3), &1);
//! assert_eq!(map.boundaries(), &[2, 4]);
//!
//! map.slice_sub(2, Some(4), 1);
//! assert_eq!(map, IntervalMap::new(0));
//! ```
//!

mod error;
mod interval;
mod intervalmap;
mod iter;
mod ops;


pub use error::{Error, Result};
pub use interval::Interval;
pub use intervalmap::IntervalMap;
pub use iter::Iter;
