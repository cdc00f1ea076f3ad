//! Error types for model assembly and estimation.

use famafrench_factors::ConstructionError;
use famafrench_traits::EstimatorError;

/// Errors that can occur while assembling, fitting or analysing a model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Nothing left to work with: an empty universe or an empty regression table.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// The requested security has no column in the returns panel.
    #[error("unknown security: {0}")]
    UnknownSecurity(String),

    /// Estimator error.
    #[error("estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    /// Factor construction error.
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Dimension mismatch.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

impl ModelError {
    /// Returns whether this error only concerns the selected security, leaving
    /// the session usable for others.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::InsufficientData(_) | Self::UnknownSecurity(_) => true,
            Self::Estimator(e) => e.is_recoverable(),
            _ => false,
        }
    }

    /// Whether the fit was refused because the design cannot identify every parameter.
    #[must_use]
    pub const fn is_rank_deficiency(&self) -> bool {
        match self {
            Self::Estimator(e) => e.is_rank_deficiency(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::UnknownSecurity("XPTO3".to_string());
        assert!(err.to_string().contains("XPTO3"));
    }

    #[test]
    fn error_is_recoverable() {
        assert!(ModelError::InsufficientData("empty table".to_string()).is_recoverable());
        assert!(ModelError::UnknownSecurity("Z".to_string()).is_recoverable());

        let err: ModelError =
            EstimatorError::InsufficientObservations { observations: 4, parameters: 4 }.into();
        assert!(err.is_recoverable());
        assert!(err.is_rank_deficiency());

        let err = ModelError::InvalidConfig("significance".to_string());
        assert!(!err.is_recoverable());
        assert!(!err.is_rank_deficiency());
    }
}
