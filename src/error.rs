//! Errors returned when building an `IntervalMap` from raw parts.

/// Reasons why boundary and value lists cannot form an `IntervalMap`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The same boundary key appears more than once
    #[error("boundary list contains a duplicate key")]
    DuplicateBoundary,
    /// Boundary keys are not in ascending order
    #[error("boundary list is not sorted in ascending order")]
    UnsortedBoundaries,
    /// Every boundary needs exactly one value
    #[error("got {boundaries} boundaries but {values} values")]
    LengthMismatch {
        /// Number of boundary keys supplied
        boundaries: usize,
        /// Number of values supplied, not counting the default
        values: usize,
    },
}

/// Result type used by `IntervalMap` constructors.
pub type Result<T> = std::result::Result<T, Error>;
