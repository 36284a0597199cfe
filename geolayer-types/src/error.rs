//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolayerTypesError {
    /// A position sequence is shorter than the geometry requires.
    #[error("expected at least {min} positions, got {actual}")]
    TooFewPositions {
        /// Minimum number of positions for the geometry.
        min: usize,
        /// Number of positions given.
        actual: usize,
    },
    /// First and last positions of a ring differ.
    #[error("first and last positions of a ring must be the same")]
    RingNotClosed,
    /// A polygon was constructed without any rings.
    #[error("polygon must have an exterior ring")]
    EmptyPolygon,
}
