//! Error type shared by every ranking and selection operator.

use thiserror::Error;

/// Errors raised by ranking, crowding, and selection operators.
///
/// None of these are recovered internally. They surface to the caller,
/// which decides whether to abort the run or skip a generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParetoError {
    /// The population has no elements.
    #[error("population must not be empty")]
    EmptyPopulation,

    /// More solutions were requested than the population holds.
    #[error("requested {requested} solutions but population has only {available}")]
    InsufficientElements {
        /// Number of solutions requested.
        requested: usize,
        /// Number of solutions available.
        available: usize,
    },

    /// Two objective vectors of different length were compared.
    #[error("objective vectors differ in length: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the left-hand objective vector.
        left: usize,
        /// Length of the right-hand objective vector.
        right: usize,
    },

    /// An operator parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParetoError>;
