//! Error types for hillclimb

use thiserror::Error;

/// Main error type for hillclimb operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HillClimbError {
    /// Requested problem size cannot be searched
    #[error("Invalid size {size}: board size must be greater than zero")]
    InvalidSize { size: usize },

    /// A state was built from rows that are not a permutation of `0..n`
    #[error("Not a permutation: {0}")]
    NotAPermutation(String),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for hillclimb operations
pub type Result<T> = std::result::Result<T, HillClimbError>;
