//! Error types for polynomial construction.

use thiserror::Error;

/// An error raised by a checked polynomial constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A dense constructor was given an empty coefficient list.
    #[error("polynomial needs at least one coefficient")]
    EmptyCoefficients,

    /// A sparse constructor was given an empty term map.
    #[error("term map contains no terms")]
    EmptyTerms,
}
