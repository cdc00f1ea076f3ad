//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,

    /// Fewer observations than needed to leave a residual degree of freedom.
    #[error("insufficient observations: {observations} rows for {parameters} parameters")]
    InsufficientObservations {
        /// Number of observations.
        observations: usize,
        /// Number of parameters.
        parameters: usize,
    },

    /// Matrix does not have full column rank.
    #[error("singular matrix: rank {rank} < {columns}")]
    Singular {
        /// Numerical rank.
        rank: usize,
        /// Number of columns.
        columns: usize,
    },

    /// Linear algebra error.
    #[error("linear algebra error: {0}")]
    LinearAlgebra(String),

    /// Invalid distribution parameters.
    #[error("distribution error: {0}")]
    Distribution(String),
}
