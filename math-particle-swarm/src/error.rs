//! Error types for the particle swarm optimizer.
//!
//! The optimization loop itself cannot fail. Every error here is raised while
//! validating inputs (bounds, configuration, the free-form run request) or by
//! the shell when it touches the filesystem.

use thiserror::Error;

/// Errors that can occur around a particle swarm run.
#[derive(Debug, Error)]
pub enum PSOError {
    /// A run request field could not be parsed as its required numeric type.
    #[error("invalid input for {field}: {value:?}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// The raw text that failed to parse
        value: String,
    },

    /// The swarm must contain at least one particle.
    #[error("particle count must be >= 1")]
    EmptySwarm,

    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// A lower bound exceeds its corresponding upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Bounds do not match the dimension of the objective.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// A run form file could not be decoded or encoded.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for PSO operations.
pub type Result<T> = std::result::Result<T, PSOError>;

impl PSOError {
    /// Returns `true` if a run request field failed to parse.
    pub fn is_input_error(&self) -> bool {
        matches!(self, PSOError::InvalidInput { .. })
    }

    /// Returns `true` if this is a bounds-related error.
    ///
    /// This includes `BoundsMismatch`, `InvalidBounds` and `DimensionMismatch`.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            PSOError::BoundsMismatch { .. }
                | PSOError::InvalidBounds { .. }
                | PSOError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if this is a configuration-related error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, PSOError::EmptySwarm | PSOError::Config(_))
    }
}
