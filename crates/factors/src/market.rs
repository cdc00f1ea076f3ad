//! Market premium.

use famafrench_primitives::{MarketFactorSeries, RateSeries};

/// MKT(t) = market index at t minus the risk-free rate at t, on the rate
/// series' own dates.
///
/// A missing input on either side leaves that date `NaN`.
#[must_use]
pub fn market_premium(rates: &RateSeries) -> MarketFactorSeries {
    let mkt = rates.market() - rates.risk_free();
    MarketFactorSeries::new(rates.dates().to_vec(), mkt, rates.risk_free().clone())
}
