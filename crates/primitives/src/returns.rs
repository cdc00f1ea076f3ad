//! Return panel definitions.

use std::collections::HashMap;

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::{AnalysisWindow, DataError, Date, Symbol};

/// Periodic returns for a set of securities over a common date index.
///
/// Values are stored as a dense `(n_dates x n_symbols)` matrix. A missing
/// observation is `NaN`. Columns are looked up through an explicit
/// symbol-to-column map rather than by scanning names.
#[derive(Debug, Clone)]
pub struct ReturnPanel {
    dates: Vec<Date>,
    symbols: Vec<Symbol>,
    index: HashMap<Symbol, usize>,
    values: Array2<f64>,
}

impl ReturnPanel {
    /// Create a new panel.
    ///
    /// # Errors
    /// Returns `DataError` if the matrix shape disagrees with the index,
    /// a symbol is repeated, or dates are not strictly increasing.
    pub fn new(
        dates: Vec<Date>,
        symbols: Vec<Symbol>,
        values: Array2<f64>,
    ) -> Result<Self, DataError> {
        if values.nrows() != dates.len() {
            return Err(DataError::DimensionMismatch {
                expected: dates.len(),
                actual: values.nrows(),
                context: "return rows".to_string(),
            });
        }
        if values.ncols() != symbols.len() {
            return Err(DataError::DimensionMismatch {
                expected: symbols.len(),
                actual: values.ncols(),
                context: "return columns".to_string(),
            });
        }
        if let Some(pair) = dates.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(DataError::UnorderedDates(pair[1].to_string()));
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, symbol) in symbols.iter().enumerate() {
            if index.insert(symbol.clone(), i).is_some() {
                return Err(DataError::DuplicateSymbol(symbol.to_string()));
            }
        }

        Ok(Self { dates, symbols, index, values })
    }

    /// Date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Security identifiers, in column order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Raw `(n_dates x n_symbols)` matrix.
    #[must_use]
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Number of dates.
    #[must_use]
    pub fn n_dates(&self) -> usize {
        self.dates.len()
    }

    /// Number of securities.
    #[must_use]
    pub fn n_symbols(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the panel has no dates or no securities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.symbols.is_empty()
    }

    /// Whether `symbol` is a column of the panel.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Column position of `symbol`.
    #[must_use]
    pub fn column_index(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    /// Return series of a single security.
    #[must_use]
    pub fn series(&self, symbol: &str) -> Option<ArrayView1<'_, f64>> {
        self.column_index(symbol).map(|j| self.values.column(j))
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
            symbols: self.symbols.clone(),
            index: self.index.clone(),
            values: self.values.select(Axis(0), &rows),
        }
    }

    /// Drop every security with at least one missing observation.
    #[must_use]
    pub fn drop_incomplete(&self) -> Self {
        let keep: Vec<usize> = (0..self.symbols.len())
            .filter(|&j| self.values.column(j).iter().all(|v| !v.is_nan()))
            .collect();

        let symbols: Vec<Symbol> = keep.iter().map(|&j| self.symbols[j].clone()).collect();
        let index = symbols.iter().enumerate().map(|(i, s)| (s.clone(), i)).collect();

        Self {
            dates: self.dates.clone(),
            symbols,
            index,
            values: self.values.select(Axis(1), &keep),
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn d(day: u32) -> Date {
        Date::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample() -> ReturnPanel {
        ReturnPanel::new(
            vec![d(2), d(3), d(4)],
            vec!["A".into(), "B".into(), "C".into()],
            array![[0.01, 0.02, f64::NAN], [0.00, -0.01, 0.03], [0.02, 0.01, 0.01]],
        )
        .unwrap()
    }

    #[test]
    fn series_lookup() {
        let panel = sample();
        assert_eq!(panel.series("B").unwrap().to_vec(), vec![0.02, -0.01, 0.01]);
        assert!(panel.series("Z").is_none());
    }

    #[test]
    fn drop_incomplete_removes_columns_with_gaps() {
        let panel = sample().drop_incomplete();
        assert_eq!(panel.symbols(), &[Symbol::new("A"), Symbol::new("B")]);
        assert!(!panel.contains("C"));
        assert_eq!(panel.column_index("B"), Some(1));
    }

    #[test]
    fn restrict_keeps_dates_inside_window() {
        let panel = sample().restrict(&AnalysisWindow::new(d(3), d(10)));
        assert_eq!(panel.dates(), &[d(3), d(4)]);
        // The gap in C sits outside the window now.
        assert_eq!(panel.drop_incomplete().n_symbols(), 3);
    }

    #[test]
    fn rejects_shape_mismatch() {
        let err = ReturnPanel::new(vec![d(2)], vec!["A".into()], array![[0.01, 0.02]]);
        assert!(matches!(err, Err(DataError::DimensionMismatch { .. })));
    }

    #[test]
    fn rejects_duplicates_and_unordered_dates() {
        let dup = ReturnPanel::new(vec![d(2)], vec!["A".into(), "A".into()], array![[0.1, 0.2]]);
        assert!(matches!(dup, Err(DataError::DuplicateSymbol(_))));

        let unordered = ReturnPanel::new(vec![d(3), d(2)], vec!["A".into()], array![[0.1], [0.2]]);
        assert!(matches!(unordered, Err(DataError::UnorderedDates(_))));
    }
}
