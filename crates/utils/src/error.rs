//! Error types for frame conversion.

use famafrench_primitives::DataError;

/// Errors that can occur while converting frames into the data model.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// The converted data violates a data-model invariant.
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A column has a type that cannot be read as requested.
    #[error("column {column} has unsupported type {dtype}")]
    UnsupportedType {
        /// Column name.
        column: String,
        /// Polars data type, rendered.
        dtype: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = UtilsError::MissingColumn("ult_preco".to_string());
        assert!(err.to_string().contains("ult_preco"));

        let err =
            UtilsError::UnsupportedType { column: "date".to_string(), dtype: "bool".to_string() };
        assert_eq!(err.to_string(), "column date has unsupported type bool");
    }
}
