//! Error types for data model construction.

/// Errors raised when building a panel or series from inconsistent parts.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Dimension mismatch between an index and its values.
    #[error("dimension mismatch for {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
        /// Context description.
        context: String,
    },

    /// The same identifier appears in more than one column.
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),

    /// Dates are not strictly increasing.
    #[error("dates must be strictly increasing (offending date: {0})")]
    UnorderedDates(String),
}
