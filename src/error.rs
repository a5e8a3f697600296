//! Error types for sparse set operations.

use thiserror::Error;

/// Result type alias for sparse set operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by [`SparseSet`](crate::SparseSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The element lies outside of `[0, capacity)`. The set is left untouched.
    #[error("element {elem} is out of the set range [0, {capacity})")]
    OutOfRange { elem: u128, capacity: usize },

    /// The requested capacity is negative, or the range `0..capacity` cannot be
    /// represented by the element type.
    #[error("invalid capacity {capacity}: must be in [0, {max}]")]
    InvalidCapacity { capacity: String, max: u128 },
}
