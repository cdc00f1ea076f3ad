//! Shared long/short construction for the style factors.

use famafrench_math::long_short_spread;
use famafrench_primitives::{Classification, ReturnPanel, Symbol};
use famafrench_traits::{FactorError, StyleFactor};
use ndarray::Array1;

/// Resolve every member of a leg to its column in `returns`.
fn columns(returns: &ReturnPanel, leg: &[Symbol]) -> Result<Vec<usize>, FactorError> {
    leg.iter()
        .map(|symbol| {
            returns
                .column_index(symbol.as_str())
                .ok_or_else(|| FactorError::UnknownSecurity(symbol.to_string()))
        })
        .collect()
}

/// `mean(long leg) - mean(short leg)` on every date of `returns`.
pub(crate) fn construct<F: StyleFactor + ?Sized>(
    factor: &F,
    returns: &ReturnPanel,
    classification: &Classification,
) -> Result<Array1<f64>, FactorError> {
    let long = columns(returns, factor.long_leg(classification))?;
    let short = columns(returns, factor.short_leg(classification))?;
    Ok(long_short_spread(returns.values(), &long, &short))
}
