//! Factor trait definitions.

use derive_more::Display;
use famafrench_primitives::{Classification, ReturnPanel, Symbol};
use ndarray::Array1;

/// Errors that can occur while constructing a factor series.
#[derive(Debug, thiserror::Error)]
pub enum FactorError {
    /// A classified security has no column in the returns panel.
    #[error("security {0} is classified but absent from the returns panel")]
    UnknownSecurity(String),
}

/// The three factors of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FactorKind {
    /// Market premium (MKT).
    #[display("MKT")]
    Market,
    /// Size spread (SMB).
    #[display("SMB")]
    Size,
    /// Value spread (HML).
    #[display("HML")]
    Value,
}

impl FactorKind {
    /// All factors, in regression column order.
    pub const ALL: [Self; 3] = [Self::Market, Self::Size, Self::Value];

    /// Column name used in tables and summaries.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Market => "mkt",
            Self::Size => "smb",
            Self::Value => "hml",
        }
    }
}

/// A factor built as the mean return of one bucket minus the mean return of another.
pub trait StyleFactor: Send + Sync {
    /// Which factor this is.
    fn kind(&self) -> FactorKind;

    /// Name of the factor column.
    fn name(&self) -> &'static str {
        self.kind().column()
    }

    /// Securities whose mean return is added.
    fn long_leg<'a>(&self, classification: &'a Classification) -> &'a [Symbol];

    /// Securities whose mean return is subtracted.
    fn short_leg<'a>(&self, classification: &'a Classification) -> &'a [Symbol];

    /// Compute the spread for every date of `returns`.
    ///
    /// Dates where either leg has no members are `NaN`.
    ///
    /// # Errors
    /// Returns `FactorError` if a leg member is absent from `returns`.
    fn construct(
        &self,
        returns: &ReturnPanel,
        classification: &Classification,
    ) -> Result<Array1<f64>, FactorError>;
}
