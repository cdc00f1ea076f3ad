//! Firm fundamentals records.

use serde::{Deserialize, Serialize};

use crate::{Date, Symbol};

/// One security's fundamentals snapshot.
///
/// Dates are optional: a value that could not be parsed at load time is
/// kept as `None`, and never satisfies a date comparison downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsRecord {
    /// Security identifier.
    pub symbol: Symbol,
    /// Price-to-earnings ratio.
    pub pl: f64,
    /// Market capitalization.
    pub market_cap: f64,
    /// Date of the last traded price.
    pub last_price: Option<Date>,
    /// Date of the last published balance sheet.
    pub last_balance_sheet: Option<Date>,
}

impl FundamentalsRecord {
    /// Create a new record.
    #[must_use]
    pub const fn new(
        symbol: Symbol,
        pl: f64,
        market_cap: f64,
        last_price: Option<Date>,
        last_balance_sheet: Option<Date>,
    ) -> Self {
        Self { symbol, pl, market_cap, last_price, last_balance_sheet }
    }

    /// Book-to-market proxy, `pl / market_cap`.
    #[must_use]
    pub fn book_to_market(&self) -> f64 {
        self.pl / self.market_cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_to_market_ratio() {
        let record = FundamentalsRecord::new("A".into(), 8.0, 100.0, None, None);
        assert!((record.book_to_market() - 0.08).abs() < 1e-12);
    }
}
