//! Error types for factor construction.

use famafrench_traits::FactorError;

/// Errors that can occur while building the universe or its factors.
#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    /// Factor computation error.
    #[error("factor error: {0}")]
    Factor(#[from] FactorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err: ConstructionError = FactorError::UnknownSecurity("B".to_string()).into();
        assert!(err.to_string().starts_with("factor error"));
        assert!(err.to_string().contains("security B"));
    }
}
