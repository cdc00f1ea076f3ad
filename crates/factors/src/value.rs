//! Value factor implementation.

use famafrench_primitives::{Classification, ReturnPanel, Symbol, ValueBucket};
use famafrench_traits::{FactorError, FactorKind, StyleFactor};
use ndarray::Array1;

use crate::spread;

/// Value style factor (HML).
///
/// Equal-weighted mean return of the High book-to-market bucket minus that
/// of the Low bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueFactor;

impl ValueFactor {
    /// Create a new value factor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StyleFactor for ValueFactor {
    fn kind(&self) -> FactorKind {
        FactorKind::Value
    }

    fn long_leg<'a>(&self, classification: &'a Classification) -> &'a [Symbol] {
        classification.value_members(ValueBucket::High)
    }

    fn short_leg<'a>(&self, classification: &'a Classification) -> &'a [Symbol] {
        classification.value_members(ValueBucket::Low)
    }

    fn construct(
        &self,
        returns: &ReturnPanel,
        classification: &Classification,
    ) -> Result<Array1<f64>, FactorError> {
        spread::construct(self, returns, classification)
    }
}
