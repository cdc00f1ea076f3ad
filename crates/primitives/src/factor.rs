//! Factor series definitions.

use ndarray::Array1;

use crate::Date;

/// SMB and HML aligned to the returns date index.
///
/// A date where either leg of a spread had no members holds `NaN`.
#[derive(Debug, Clone)]
pub struct StyleFactorSeries {
    /// Date index (same as the returns panel).
    pub dates: Vec<Date>,
    /// Small minus big.
    pub smb: Array1<f64>,
    /// High minus low book-to-market.
    pub hml: Array1<f64>,
}

impl StyleFactorSeries {
    /// Create a new style factor series.
    #[must_use]
    pub fn new(dates: Vec<Date>, smb: Array1<f64>, hml: Array1<f64>) -> Self {
        debug_assert_eq!(dates.len(), smb.len());
        debug_assert_eq!(dates.len(), hml.len());
        Self { dates, smb, hml }
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

    /// Number of dates where SMB or HML is undefined.
    #[must_use]
    pub fn undefined_count(&self) -> usize {
        self.smb.iter().zip(self.hml.iter()).filter(|(s, h)| s.is_nan() || h.is_nan()).count()
    }
}

/// Market premium aligned to the rates date index.
#[derive(Debug, Clone)]
pub struct MarketFactorSeries {
    /// Date index (same as the rate series).
    pub dates: Vec<Date>,
    /// Market index minus risk-free rate.
    pub mkt: Array1<f64>,
    /// Risk-free rate, kept for excess-return computation.
    pub risk_free: Array1<f64>,
}

impl MarketFactorSeries {
    /// Create a new market factor series.
    #[must_use]
    pub fn new(dates: Vec<Date>, mkt: Array1<f64>, risk_free: Array1<f64>) -> Self {
        debug_assert_eq!(dates.len(), mkt.len());
        debug_assert_eq!(dates.len(), risk_free.len());
        Self { dates, mkt, risk_free }
    }

    /// Row position of `date`, if present.
    #[must_use]
    pub fn position(&self, date: Date) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }
}

/// The three Fama-French factors, each on its source date index.
#[derive(Debug, Clone)]
pub struct FactorSeries {
    /// SMB and HML.
    pub style: StyleFactorSeries,
    /// MKT and the risk-free rate.
    pub market: MarketFactorSeries,
}

impl FactorSeries {
    /// Create new factor series.
    #[must_use]
    pub const fn new(style: StyleFactorSeries, market: MarketFactorSeries) -> Self {
        Self { style, market }
    }
}
