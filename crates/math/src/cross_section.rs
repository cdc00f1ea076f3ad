//! Cross-sectional statistical operations.

use ndarray::{Array1, ArrayView2, Axis};

/// Arithmetic mean of a cross-section.
///
/// `NaN` entries are left out. Returns `None` when no defined value remains.
/// No outlier treatment is applied.
#[must_use]
pub fn cross_sectional_mean(values: &[f64]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Equal-weighted mean across a subset of columns, one value per row.
///
/// An empty `columns` set yields `NaN` on every row rather than zero, so the
/// caller can tell an undefined average apart from a flat one. A `NaN` in any
/// selected cell propagates to that row.
///
/// # Arguments
/// * `values` - Matrix of shape (n_dates x n_assets)
/// * `columns` - Column positions of the group members
#[must_use]
pub fn group_mean(values: ArrayView2<'_, f64>, columns: &[usize]) -> Array1<f64> {
    let n_rows = values.nrows();
    if columns.is_empty() {
        return Array1::from_elem(n_rows, f64::NAN);
    }

    values
        .select(Axis(1), columns)
        .mean_axis(Axis(1))
        .unwrap_or_else(|| Array1::from_elem(n_rows, f64::NAN))
}

/// Difference of two group means: `mean(long) - mean(short)` per row.
#[must_use]
pub fn long_short_spread(
    values: ArrayView2<'_, f64>,
    long: &[usize],
    short: &[usize],
) -> Array1<f64> {
    group_mean(values, long) - group_mean(values, short)
}
