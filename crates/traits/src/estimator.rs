//! Model estimation trait definitions.

use famafrench_primitives::RegressionTable;

/// Errors that can occur during estimation.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    /// Dimension mismatch in input data.
    #[error("dimension mismatch for {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
        /// Context description.
        context: String,
    },

    /// No observations at all.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Not enough observations to leave a residual degree of freedom.
    #[error(
        "insufficient observations: {observations} rows for {parameters} parameters leaves no residual degrees of freedom"
    )]
    InsufficientObservations {
        /// Number of observations.
        observations: usize,
        /// Number of parameters.
        parameters: usize,
    },

    /// Rank deficiency in design matrix.
    #[error("rank deficient design matrix: rank {rank} < columns {columns}")]
    RankDeficient {
        /// Actual rank.
        rank: usize,
        /// Number of columns.
        columns: usize,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Linear algebra or distribution error.
    #[error("linear algebra error: {0}")]
    LinearAlgebra(String),
}

impl EstimatorError {
    /// Returns whether this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. }
                | Self::InsufficientObservations { .. }
                | Self::RankDeficient { .. }
        )
    }

    /// Whether the design could not identify every parameter.
    #[must_use]
    pub const fn is_rank_deficiency(&self) -> bool {
        matches!(self, Self::InsufficientObservations { .. } | Self::RankDeficient { .. })
    }
}

/// Trait for fitting a model to one security's regression table.
pub trait ModelEstimator: Send + Sync {
    /// Configuration type for this estimator.
    type Config: Default + Clone + Send + Sync;

    /// The fitted model produced.
    type Output;

    /// Create a new estimator with the given configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Fit the model.
    ///
    /// # Errors
    /// Returns `EstimatorError` if the table is empty, the design cannot
    /// identify every parameter, or computation fails.
    fn fit(&self, table: &RegressionTable) -> Result<Self::Output, EstimatorError>;
}
