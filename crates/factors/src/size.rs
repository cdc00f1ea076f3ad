//! Size factor implementation.

use famafrench_primitives::{Classification, ReturnPanel, SizeBucket, Symbol};
use famafrench_traits::{FactorError, FactorKind, StyleFactor};
use ndarray::Array1;

use crate::spread;

/// Size style factor (SMB).
///
/// Equal-weighted mean return of the Small bucket minus that of the Big
/// bucket, date by date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeFactor;

impl SizeFactor {
    /// Create a new size factor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StyleFactor for SizeFactor {
    fn kind(&self) -> FactorKind {
        FactorKind::Size
    }

    fn long_leg<'a>(&self, classification: &'a Classification) -> &'a [Symbol] {
        classification.size_members(SizeBucket::Small)
    }

    fn short_leg<'a>(&self, classification: &'a Classification) -> &'a [Symbol] {
        classification.size_members(SizeBucket::Big)
    }

    fn construct(
        &self,
        returns: &ReturnPanel,
        classification: &Classification,
    ) -> Result<Array1<f64>, FactorError> {
        spread::construct(self, returns, classification)
    }
}
