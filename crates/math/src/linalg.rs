//! Dense linear algebra helpers.

use ndarray::Array2;

use crate::MathError;

/// Relative tolerance below which a pivot counts as zero.
pub const RANK_TOLERANCE: f64 = 1e-10;

/// Numerical rank of `a` by Gaussian elimination with partial pivoting.
///
/// A pivot is treated as zero when its magnitude falls below
/// `RANK_TOLERANCE` times the largest absolute entry of `a`.
#[must_use]
pub fn matrix_rank(a: &Array2<f64>) -> usize {
    let (n_rows, n_cols) = a.dim();
    let scale = a.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return 0;
    }
    let tol = RANK_TOLERANCE * scale;

    let mut m = a.clone();
    let mut rank = 0;
    for col in 0..n_cols {
        if rank == n_rows {
            break;
        }

        // Find pivot among the rows not yet used
        let mut max_row = rank;
        let mut max_val = m[[rank, col]].abs();
        for row in (rank + 1)..n_rows {
            if m[[row, col]].abs() > max_val {
                max_val = m[[row, col]].abs();
                max_row = row;
            }
        }
        if max_val < tol {
            continue;
        }

        if max_row != rank {
            for j in 0..n_cols {
                m.swap([rank, j], [max_row, j]);
            }
        }

        for row in (rank + 1)..n_rows {
            let factor = m[[row, col]] / m[[rank, col]];
            for j in col..n_cols {
                m[[row, j]] -= factor * m[[rank, j]];
            }
        }
        rank += 1;
    }

    rank
}

/// Invert a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// # Errors
/// Returns `MathError::Singular` if a pivot vanishes.
pub fn invert(a: &Array2<f64>) -> Result<Array2<f64>, MathError> {
    let n = a.nrows();
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != n {
        return Err(MathError::LinearAlgebra("matrix must be square".to_string()));
    }

    let scale = a.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tol = f64::EPSILON * scale * n as f64;

    // Augmented matrix [A | I]
    let mut aug = Array2::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = a[[i, j]];
        }
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = aug[[col, col]].abs();
        for row in (col + 1)..n {
            if aug[[row, col]].abs() > max_val {
                max_val = aug[[row, col]].abs();
                max_row = row;
            }
        }

        if max_val <= tol || !max_val.is_finite() {
            return Err(MathError::Singular { rank: matrix_rank(a), columns: n });
        }

        if max_row != col {
            for j in 0..(2 * n) {
                aug.swap([col, j], [max_row, j]);
            }
        }

        let pivot = aug[[col, col]];
        for j in 0..(2 * n) {
            aug[[col, j]] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..(2 * n) {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
        }
    }

    let mut inverse = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            inverse[[i, j]] = aug[[i, n + j]];
        }
    }
    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn rank_of_full_and_collinear_matrices() {
        let full = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        assert_eq!(matrix_rank(&full), 2);

        // Third column is the negative of the second.
        let collinear = array![[1.0, 0.2, -0.2], [1.0, 0.5, -0.5], [1.0, -0.1, 0.1], [1.0, 0.3, -0.3]];
        assert_eq!(matrix_rank(&collinear), 2);

        assert_eq!(matrix_rank(&Array2::zeros((3, 3))), 0);
    }

    #[test]
    fn inverse_round_trips_to_identity() {
        let a = array![[4.0, 7.0], [2.0, 6.0]];
        let inv = invert(&a).unwrap();
        let identity = a.dot(&inv);
        assert_relative_eq!(identity[[0, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(identity[[0, 1]], 0.0, epsilon = 1e-12);
        assert_relative_eq!(identity[[1, 0]], 0.0, epsilon = 1e-12);
        assert_relative_eq!(identity[[1, 1]], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn singular_matrix_is_reported() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        match invert(&a) {
            Err(MathError::Singular { rank, columns }) => {
                assert_eq!(rank, 1);
                assert_eq!(columns, 2);
            }
            other => panic!("expected singular error, got {other:?}"),
        }
    }
}
