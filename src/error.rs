//! CascError: unified error type for the public API.
//!
//! Lookup misses are reported through `Option`, not through this enum;
//! `CascError` covers resource exhaustion and malformed inputs only.
//! Internal inconsistencies (a back-fill that cannot find its sibling)
//! are library bugs and panic with a diagnostic instead.

use thiserror::Error;

/// Unified error type for complex mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CascError {
    /// The vertex key allocator has no free keys left.
    #[error("vertex key space exhausted")]
    Exhausted,
    /// An insert was attempted with an empty name.
    #[error("simplex name must be non-empty")]
    EmptyName,
    /// Simplex names must be strictly ascending key tuples.
    #[error("simplex name must be strictly ascending (offending key at position {0})")]
    UnsortedName(usize),
    /// A name longer than the complex dimension was supplied.
    #[error("simplex of {got} vertices exceeds complex dimension {max}")]
    DimensionOverflow { got: usize, max: usize },
    /// `decimate` was called on the root simplex.
    #[error("the root simplex cannot be decimated")]
    DecimateRoot,
}
