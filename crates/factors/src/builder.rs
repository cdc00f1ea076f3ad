//! Factor series construction.

use famafrench_primitives::{
    Classification, FactorSeries, RateSeries, ReturnPanel, StyleFactorSeries,
};
use famafrench_traits::StyleFactor;
use tracing::{debug, warn};

use crate::{ConstructionError, SizeFactor, ValueFactor, market_premium};

/// Builds SMB, HML and MKT for one session.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorBuilder {
    size: SizeFactor,
    value: ValueFactor,
}

impl FactorBuilder {
    /// Create a new factor builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { size: SizeFactor::new(), value: ValueFactor::new() }
    }

    /// SMB and HML on the returns panel's date index.
    ///
    /// # Errors
    /// Returns `ConstructionError` if a classified security has no returns column.
    pub fn style(
        &self,
        returns: &ReturnPanel,
        classification: &Classification,
    ) -> Result<StyleFactorSeries, ConstructionError> {
        let smb = self.size.construct(returns, classification)?;
        let hml = self.value.construct(returns, classification)?;
        let series = StyleFactorSeries::new(returns.dates().to_vec(), smb, hml);

        let undefined = series.undefined_count();
        if undefined > 0 {
            warn!(
                undefined,
                dates = series.len(),
                "style factors undefined on some dates: a bucket has no members"
            );
        }
        debug!(dates = series.len(), "built style factors");

        Ok(series)
    }

    /// All three factors.
    ///
    /// # Errors
    /// Returns `ConstructionError` if a classified security has no returns column.
    pub fn build(
        &self,
        returns: &ReturnPanel,
        classification: &Classification,
        rates: &RateSeries,
    ) -> Result<FactorSeries, ConstructionError> {
        let style = self.style(returns, classification)?;
        let market = market_premium(rates);
        debug!(dates = market.dates.len(), "built market premium");
        Ok(FactorSeries::new(style, market))
    }
}
