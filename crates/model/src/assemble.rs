//! Per-security regression table assembly.

use famafrench_primitives::{FactorSeries, RegressionRow, RegressionTable, ReturnPanel, Symbol};
use tracing::debug;

use crate::ModelError;

/// Join one security's returns with the three factors.
///
/// Rows are the dates of the returns panel that also appear in the market
/// series. A row with any undefined value is dropped and the excess return is
/// `raw - risk_free` on the same date. The resulting table may be empty.
///
/// # Errors
/// Returns `ModelError::UnknownSecurity` if `symbol` has no returns column and
/// `ModelError::DimensionMismatch` if the style factors are not on the
/// panel's date index.
pub fn assemble(
    returns: &ReturnPanel,
    factors: &FactorSeries,
    symbol: &str,
) -> Result<RegressionTable, ModelError> {
    let series =
        returns.series(symbol).ok_or_else(|| ModelError::UnknownSecurity(symbol.to_string()))?;

    let style = &factors.style;
    if style.dates.as_slice() != returns.dates() {
        return Err(ModelError::DimensionMismatch(format!(
            "style factors cover {} dates, returns panel {}",
            style.len(),
            returns.n_dates()
        )));
    }

    let market = &factors.market;
    let rows: Vec<RegressionRow> = style
        .dates
        .iter()
        .enumerate()
        .filter_map(|(i, &date)| {
            market.position(date).map(|j| RegressionRow {
                date,
                raw_return: series[i],
                risk_free: market.risk_free[j],
                mkt: market.mkt[j],
                smb: style.smb[i],
                hml: style.hml[i],
            })
        })
        .collect();

    let joined = rows.len();
    let table = RegressionTable::from_rows(Symbol::new(symbol), rows);
    debug!(symbol, joined, kept = table.len(), "assembled regression table");

    Ok(table)
}
