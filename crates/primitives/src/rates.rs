//! Market index and risk-free rate series.

use ndarray::Array1;

use crate::{AnalysisWindow, DataError, Date};

/// Market index and risk-free rate over a date index (`ibov` and `selic`).
///
/// Missing values are `NaN`.
#[derive(Debug, Clone)]
pub struct RateSeries {
    dates: Vec<Date>,
    market: Array1<f64>,
    risk_free: Array1<f64>,
}

impl RateSeries {
    /// Create a new rate series.
    ///
    /// # Errors
    /// Returns `DataError` if lengths disagree or dates are not strictly increasing.
    pub fn new(
        dates: Vec<Date>,
        market: Array1<f64>,
        risk_free: Array1<f64>,
    ) -> Result<Self, DataError> {
        for (len, context) in [(market.len(), "market index"), (risk_free.len(), "risk-free rate")]
        {
            if len != dates.len() {
                return Err(DataError::DimensionMismatch {
                    expected: dates.len(),
                    actual: len,
                    context: context.to_string(),
                });
            }
        }
        if let Some(pair) = dates.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(DataError::UnorderedDates(pair[1].to_string()));
        }

        Ok(Self { dates, market, risk_free })
    }

    /// Date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Market index values.
    #[must_use]
    pub const fn market(&self) -> &Array1<f64> {
        &self.market
    }

    /// Risk-free rate values.
    #[must_use]
    pub const fn risk_free(&self) -> &Array1<f64> {
        &self.risk_free
    }

    /// Number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Keep only the rows whose date falls inside `window`.
    #[must_use]
    pub fn restrict(&self, window: &AnalysisWindow) -> Self {
        let rows: Vec<usize> = self
            .dates
            .iter()
            .enumerate()
            .filter(|(_, d)| window.contains(**d))
            .map(|(i, _)| i)
            .collect();

        Self {
            dates: rows.iter().map(|&i| self.dates[i]).collect(),
            market: rows.iter().map(|&i| self.market[i]).collect(),
            risk_free: rows.iter().map(|&i| self.risk_free[i]).collect(),
        }
    }
}
