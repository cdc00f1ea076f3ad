//! Per-security regression table.

use ndarray::{Array1, Array2};

use crate::{Date, Symbol};

/// Names of the regressors, in design-matrix column order.
pub const REGRESSORS: [&str; 4] = ["const", "mkt", "smb", "hml"];

/// One joined date for a single security, before NA-dropping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionRow {
    /// Observation date.
    pub date: Date,
    /// The security's raw return.
    pub raw_return: f64,
    /// Risk-free rate on the same date.
    pub risk_free: f64,
    /// Market premium.
    pub mkt: f64,
    /// Small minus big.
    pub smb: f64,
    /// High minus low.
    pub hml: f64,
}

impl RegressionRow {
    /// Whether every value needed by the regression is defined.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [self.raw_return, self.risk_free, self.mkt, self.smb, self.hml]
            .iter()
            .all(|v| !v.is_nan())
    }

    /// Raw return in excess of the risk-free rate.
    #[must_use]
    pub fn excess_return(&self) -> f64 {
        self.raw_return - self.risk_free
    }
}

/// Regression-ready data for one security: fully populated rows indexed by date.
#[derive(Debug, Clone)]
pub struct RegressionTable {
    /// Security the table was built for.
    pub symbol: Symbol,
    /// Date index.
    pub dates: Vec<Date>,
    /// Raw return.
    pub raw_return: Array1<f64>,
    /// Risk-free rate.
    pub risk_free: Array1<f64>,
    /// Excess return (regression target).
    pub excess: Array1<f64>,
    /// Market premium.
    pub mkt: Array1<f64>,
    /// Small minus big.
    pub smb: Array1<f64>,
    /// High minus low.
    pub hml: Array1<f64>,
}

impl RegressionTable {
    /// Build a table from joined rows, discarding any row with an undefined value.
    #[must_use]
    pub fn from_rows(symbol: Symbol, rows: impl IntoIterator<Item = RegressionRow>) -> Self {
        let rows: Vec<RegressionRow> = rows.into_iter().filter(RegressionRow::is_complete).collect();

        Self {
            symbol,
            dates: rows.iter().map(|r| r.date).collect(),
            raw_return: rows.iter().map(|r| r.raw_return).collect(),
            risk_free: rows.iter().map(|r| r.risk_free).collect(),
            excess: rows.iter().map(RegressionRow::excess_return).collect(),
            mkt: rows.iter().map(|r| r.mkt).collect(),
            smb: rows.iter().map(|r| r.smb).collect(),
            hml: rows.iter().map(|r| r.hml).collect(),
        }
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Regression target.
    #[must_use]
    pub const fn target(&self) -> &Array1<f64> {
        &self.excess
    }

    /// Design matrix `[1, mkt, smb, hml]` with one row per observation.
    #[must_use]
    pub fn design_matrix(&self) -> Array2<f64> {
        let n = self.len();
        let mut x = Array2::zeros((n, REGRESSORS.len()));
        for i in 0..n {
            x[[i, 0]] = 1.0;
            x[[i, 1]] = self.mkt[i];
            x[[i, 2]] = self.smb[i];
            x[[i, 3]] = self.hml[i];
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(day: u32, raw: f64, rf: f64, smb: f64) -> RegressionRow {
        RegressionRow {
            date: Date::from_ymd_opt(2024, 1, day).unwrap(),
            raw_return: raw,
            risk_free: rf,
            mkt: 0.01,
            smb,
            hml: -0.002,
        }
    }

    #[test]
    fn from_rows_drops_incomplete() {
        let table = RegressionTable::from_rows(
            "A".into(),
            [row(2, 0.02, 0.001, 0.003), row(3, 0.01, 0.001, f64::NAN), row(4, -0.01, 0.0, 0.0)],
        );

        assert_eq!(table.len(), 2);
        assert!((table.excess[0] - 0.019).abs() < 1e-12);
        assert!(table.smb.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn only_undefined_values_make_a_row_incomplete() {
        assert!(row(2, f64::INFINITY, 0.0, 0.0).is_complete());
        assert!(!row(2, 0.01, f64::NAN, 0.0).is_complete());

        let table = RegressionTable::from_rows(
            "A".into(),
            [row(2, 0.02, 0.0, f64::NEG_INFINITY), row(3, 0.01, 0.0, f64::NAN)],
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.smb[0], f64::NEG_INFINITY);
    }

    #[test]
    fn design_matrix_layout() {
        let table = RegressionTable::from_rows("A".into(), [row(2, 0.02, 0.0, 0.003)]);
        let x = table.design_matrix();
        assert_eq!(x.dim(), (1, 4));
        assert_eq!(x.row(0).to_vec(), vec![1.0, 0.01, 0.003, -0.002]);
    }
}
