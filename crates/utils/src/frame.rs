//! Conversions from polars frames to the typed data model.

use famafrench_primitives::{Date, FundamentalsRecord, RateSeries, ReturnPanel, Symbol};
use ndarray::{Array1, Array2};
use polars::prelude::*;
use tracing::{debug, warn};

use crate::{UtilsError, date_column};

/// Default name of the date column in returns and rates tables.
pub const DATE_COLUMN: &str = "date";

/// Column names of the fundamentals table.
pub mod fundamentals_columns {
    /// Ticker.
    pub const SYMBOL: &str = "Papel";
    /// Price-to-earnings.
    pub const PL: &str = "pl";
    /// Market capitalisation.
    pub const MARKET_CAP: &str = "market_cap";
    /// Date of the last traded price.
    pub const LAST_PRICE: &str = "ult_preco";
    /// Date of the last balance sheet.
    pub const LAST_BALANCE_SHEET: &str = "ult_balanco";
}

/// Column names of the rates table.
pub mod rates_columns {
    /// Market index.
    pub const MARKET: &str = "ibov";
    /// Risk-free rate.
    pub const RISK_FREE: &str = "selic";
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, UtilsError> {
    let values = df
        .column(name)
        .map_err(|_| UtilsError::MissingColumn(name.to_string()))?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Row order that sorts the dated rows ascending; rows without a date are left out.
fn dated_rows(df: &DataFrame, date_col: &str) -> Result<Vec<(usize, Date)>, UtilsError> {
    let dates = date_column(df, date_col)?;
    let mut rows: Vec<(usize, Date)> =
        dates.into_iter().enumerate().filter_map(|(i, d)| d.map(|d| (i, d))).collect();

    let undated = df.height() - rows.len();
    if undated > 0 {
        warn!(column = date_col, undated, "rows without a date skipped");
    }
    rows.sort_by_key(|&(_, d)| d);
    Ok(rows)
}

/// Build a returns panel from a wide frame: one date column, one column per security.
///
/// Nulls become `NaN`. Rows are sorted by date.
///
/// # Errors
/// Returns `UtilsError` if the date column is missing or unreadable, a
/// security column is not numeric, or two rows share a date.
pub fn returns_from_frame(df: &DataFrame, date_col: &str) -> Result<ReturnPanel, UtilsError> {
    let rows = dated_rows(df, date_col)?;
    let symbols: Vec<Symbol> = df
        .get_column_names()
        .into_iter()
        .filter(|name| name.as_str() != date_col)
        .map(|name| Symbol::new(name.as_str()))
        .collect();

    let mut values = Array2::from_elem((rows.len(), symbols.len()), f64::NAN);
    for (j, symbol) in symbols.iter().enumerate() {
        let column = float_column(df, symbol.as_str())?;
        for (i, &(source, _)) in rows.iter().enumerate() {
            values[[i, j]] = column[source];
        }
    }

    let dates = rows.into_iter().map(|(_, d)| d).collect();
    let panel = ReturnPanel::new(dates, symbols, values)?;
    debug!(dates = panel.n_dates(), securities = panel.n_symbols(), "read returns panel");
    Ok(panel)
}

/// Read fundamentals records (`Papel`, `pl`, `market_cap`, `ult_preco`, `ult_balanco`).
///
/// Rows without a ticker are skipped. Missing numbers become `NaN` and
/// unparsable dates `None`, both of which fail the universe filter.
///
/// # Errors
/// Returns `UtilsError` if a column is missing or has an unreadable type.
pub fn fundamentals_from_frame(df: &DataFrame) -> Result<Vec<FundamentalsRecord>, UtilsError> {
    use fundamentals_columns::{LAST_BALANCE_SHEET, LAST_PRICE, MARKET_CAP, PL, SYMBOL};

    let symbols = df
        .column(SYMBOL)
        .map_err(|_| UtilsError::MissingColumn(SYMBOL.to_string()))?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let pl = float_column(df, PL)?;
    let market_cap = float_column(df, MARKET_CAP)?;
    let last_price = date_column(df, LAST_PRICE)?;
    let last_balance_sheet = date_column(df, LAST_BALANCE_SHEET)?;

    let records: Vec<FundamentalsRecord> = symbols
        .str()?
        .into_iter()
        .enumerate()
        .filter_map(|(i, symbol)| {
            symbol.map(|s| {
                FundamentalsRecord::new(
                    Symbol::new(s.trim()),
                    pl[i],
                    market_cap[i],
                    last_price[i],
                    last_balance_sheet[i],
                )
            })
        })
        .collect();

    debug!(rows = df.height(), records = records.len(), "read fundamentals");
    Ok(records)
}

/// Build the rate series from a frame with a date column, `ibov` and `selic`.
///
/// # Errors
/// Returns `UtilsError` if a column is missing or unreadable, or two rows share a date.
pub fn rates_from_frame(df: &DataFrame, date_col: &str) -> Result<RateSeries, UtilsError> {
    let rows = dated_rows(df, date_col)?;
    let market = float_column(df, rates_columns::MARKET)?;
    let risk_free = float_column(df, rates_columns::RISK_FREE)?;

    let dates = rows.iter().map(|&(_, d)| d).collect();
    let market: Array1<f64> = rows.iter().map(|&(i, _)| market[i]).collect();
    let risk_free: Array1<f64> = rows.iter().map(|&(i, _)| risk_free[i]).collect();

    let rates = RateSeries::new(dates, market, risk_free)?;
    debug!(dates = rates.len(), "read rates");
    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn wide_returns_frame() {
        let df = df! {
            "date" => &["2024-01-03", "2024-01-02", "bad"],
            "PETR4" => &[Some(0.02), Some(0.01), Some(0.5)],
            "VALE3" => &[None, Some(-0.01), Some(0.5)],
        }
        .unwrap();

        let panel = returns_from_frame(&df, DATE_COLUMN).unwrap();

        assert_eq!(panel.dates(), &[d(2024, 1, 2), d(2024, 1, 3)]);
        assert_eq!(panel.symbols(), &[Symbol::new("PETR4"), Symbol::new("VALE3")]);
        assert_eq!(panel.series("PETR4").unwrap().to_vec(), vec![0.01, 0.02]);
        assert!(panel.series("VALE3").unwrap()[1].is_nan());
    }

    #[test]
    fn duplicate_dates_are_rejected() {
        let df = df! {
            "date" => &["2024-01-02", "2024-01-02"],
            "A" => &[0.01, 0.02],
        }
        .unwrap();

        assert!(matches!(returns_from_frame(&df, DATE_COLUMN), Err(UtilsError::Data(_))));
    }

    #[test]
    fn fundamentals_frame() {
        let df = df! {
            "Papel" => &[Some("PETR4"), None, Some("VALE3")],
            "pl" => &[Some(4.5), Some(1.0), None],
            "market_cap" => &[4.8e11, 1.0, 3.1e11],
            "ult_preco" => &["2025-01-02", "2025-01-02", "-"],
            "ult_balanco" => &["2024-12-31", "2024-12-31", "2024-12-31"],
        }
        .unwrap();

        let records = fundamentals_from_frame(&df).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, Symbol::new("PETR4"));
        assert_eq!(records[0].pl, 4.5);
        assert_eq!(records[0].last_price, Some(d(2025, 1, 2)));
        assert!(records[1].pl.is_nan());
        assert_eq!(records[1].last_price, None);
        assert_eq!(records[1].last_balance_sheet, Some(d(2024, 12, 31)));
    }

    #[test]
    fn fundamentals_frame_requires_every_column() {
        let df = df! {
            "Papel" => &["PETR4"],
            "pl" => &[4.5],
        }
        .unwrap();

        let err = fundamentals_from_frame(&df).unwrap_err();
        assert!(matches!(err, UtilsError::MissingColumn(c) if c == "market_cap"));
    }

    #[test]
    fn rates_frame() {
        let df = df! {
            "date" => &[d(2024, 1, 3), d(2024, 1, 2)],
            "ibov" => &[0.012, -0.004],
            "selic" => &[Some(0.0004), None],
        }
        .unwrap();

        let rates = rates_from_frame(&df, DATE_COLUMN).unwrap();

        assert_eq!(rates.dates(), &[d(2024, 1, 2), d(2024, 1, 3)]);
        assert_eq!(rates.market()[0], -0.004);
        assert!(rates.risk_free()[0].is_nan());
        assert_eq!(rates.risk_free()[1], 0.0004);
    }
}
