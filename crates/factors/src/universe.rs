//! Universe selection.

use std::collections::HashSet;

use famafrench_primitives::{AnalysisWindow, Date, FundamentalsRecord, ReturnPanel, Symbol};
use tracing::{debug, info, warn};

/// Configuration for universe selection.
#[derive(Debug, Clone)]
pub struct UniverseConfig {
    /// Balance sheets must be dated on or after, and prices strictly after, this date.
    pub reference_date: Date,
    /// Price-to-earnings must be strictly greater than this.
    pub min_pl: f64,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self { reference_date: AnalysisWindow::default().end, min_pl: 0.0 }
    }
}

/// Restricts fundamentals to securities with valid, recent data that also
/// appear in the returns panel.
#[derive(Debug, Clone)]
pub struct UniverseFilter {
    config: UniverseConfig,
}

impl UniverseFilter {
    /// Create a new filter with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(UniverseConfig::default())
    }

    /// Create a new filter with custom configuration.
    #[must_use]
    pub const fn with_config(config: UniverseConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Restrict `returns` to `window` and drop every security with a gap inside it.
    #[must_use]
    pub fn prepare_returns(returns: &ReturnPanel, window: &AnalysisWindow) -> ReturnPanel {
        let windowed = returns.restrict(window);
        let complete = windowed.drop_incomplete();
        info!(
            start = %window.start,
            end = %window.end,
            dates = complete.n_dates(),
            securities = complete.n_symbols(),
            dropped = windowed.n_symbols() - complete.n_symbols(),
            "prepared returns panel"
        );
        complete
    }

    /// Whether a single record qualifies.
    ///
    /// A missing date never qualifies.
    #[must_use]
    pub fn accepts(&self, record: &FundamentalsRecord, returns: &ReturnPanel) -> bool {
        let reference = self.config.reference_date;
        record.pl > self.config.min_pl
            && record.last_balance_sheet.is_some_and(|d| d >= reference)
            && record.last_price.is_some_and(|d| d > reference)
            && returns.contains(record.symbol.as_str())
    }

    /// Keep the records that qualify, in input order.
    ///
    /// Each symbol is kept at most once: the first qualifying record wins and
    /// later ones are skipped with a warning. Returns an empty vector when
    /// nothing qualifies.
    #[must_use]
    pub fn filter(
        &self,
        fundamentals: &[FundamentalsRecord],
        returns: &ReturnPanel,
    ) -> Vec<FundamentalsRecord> {
        let mut seen: HashSet<&Symbol> = HashSet::new();
        let mut kept = Vec::new();
        for record in fundamentals.iter().filter(|r| self.accepts(r, returns)) {
            if seen.insert(&record.symbol) {
                kept.push(record.clone());
            } else {
                warn!(symbol = %record.symbol, "duplicate fundamentals record skipped");
            }
        }

        debug!(
            reference = %self.config.reference_date,
            candidates = fundamentals.len(),
            kept = kept.len(),
            "filtered fundamentals"
        );
        kept
    }
}

impl Default for UniverseFilter {
    fn default() -> Self {
        Self::new()
    }
}
