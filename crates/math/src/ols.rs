//! Ordinary least squares with classical inference.

use std::f64::consts::PI;

use ndarray::{Array1, Array2};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::{MathError, invert, matrix_rank};

/// Result of an ordinary least squares fit.
///
/// Inference assumes i.i.d. normal residuals and a design whose first
/// column is a constant.
#[derive(Debug, Clone)]
pub struct OlsResult {
    /// Estimated coefficients, in design column order.
    pub coefficients: Array1<f64>,
    /// Standard errors of the coefficients.
    pub std_errors: Array1<f64>,
    /// t-statistics against zero.
    pub t_values: Array1<f64>,
    /// Two-sided p-values of the t-statistics.
    pub p_values: Array1<f64>,
    /// Fitted values.
    pub fitted: Array1<f64>,
    /// Residuals.
    pub residuals: Array1<f64>,
    /// Centered R-squared.
    pub r_squared: f64,
    /// R-squared adjusted for degrees of freedom.
    pub adj_r_squared: f64,
    /// F-statistic of the joint test that all slopes are zero.
    pub f_statistic: f64,
    /// p-value of the F-statistic.
    pub f_p_value: f64,
    /// Gaussian log-likelihood at the estimate.
    pub log_likelihood: f64,
    /// Sum of squared residuals.
    pub ssr: f64,
    /// Number of observations.
    pub nobs: usize,
    /// Model degrees of freedom (slopes, excluding the constant).
    pub df_model: usize,
    /// Residual degrees of freedom.
    pub df_resid: usize,
}

impl OlsResult {
    /// Number of estimated parameters, constant included.
    #[must_use]
    pub const fn n_params(&self) -> usize {
        self.df_model + 1
    }

    /// Akaike information criterion.
    #[must_use]
    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood + 2.0 * self.n_params() as f64
    }

    /// Bayesian information criterion.
    #[must_use]
    pub fn bic(&self) -> f64 {
        -2.0 * self.log_likelihood + (self.nobs as f64).ln() * self.n_params() as f64
    }

    /// Durbin-Watson statistic of the residuals.
    #[must_use]
    pub fn durbin_watson(&self) -> f64 {
        if self.ssr == 0.0 {
            return f64::NAN;
        }
        let diff_sq: f64 =
            self.residuals.windows(2).into_iter().map(|w| (w[1] - w[0]).powi(2)).sum();
        diff_sq / self.ssr
    }

    /// Two-sided confidence intervals for every coefficient.
    ///
    /// # Errors
    /// Returns error if `level` is not in (0, 1).
    pub fn confidence_intervals(&self, level: f64) -> Result<Vec<(f64, f64)>, MathError> {
        if !(level > 0.0 && level < 1.0) {
            return Err(MathError::Distribution(format!("confidence level {level} not in (0, 1)")));
        }
        let dist = students_t(self.df_resid)?;
        let q = dist.inverse_cdf(0.5 + level / 2.0);

        Ok(self
            .coefficients
            .iter()
            .zip(self.std_errors.iter())
            .map(|(b, se)| (b - q * se, b + q * se))
            .collect())
    }
}

/// Fit `y = X beta + e` by ordinary least squares.
///
/// Solves the normal equations `(X'X) beta = X'y` and derives standard errors
/// from `sigma^2 (X'X)^-1` with `sigma^2 = SSR / (n - p)`.
///
/// # Arguments
/// * `y` - Response vector (n,)
/// * `x` - Design matrix (n x p), first column constant
///
/// # Errors
/// Returns `MathError::InsufficientObservations` when `n <= p` (no residual
/// degrees of freedom) and `MathError::Singular` when `X` lacks full column rank.
pub fn ordinary_least_squares(y: &Array1<f64>, x: &Array2<f64>) -> Result<OlsResult, MathError> {
    let n = y.len();
    let p = x.ncols();

    if x.nrows() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: x.nrows() });
    }
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if p == 0 {
        return Err(MathError::LinearAlgebra("design matrix has no columns".to_string()));
    }
    if n <= p {
        return Err(MathError::InsufficientObservations { observations: n, parameters: p });
    }

    let rank = matrix_rank(x);
    if rank < p {
        return Err(MathError::Singular { rank, columns: p });
    }

    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);
    let xtx_inv = invert(&xtx)?;
    let coefficients = xtx_inv.dot(&xty);

    let fitted = x.dot(&coefficients);
    let residuals = y - &fitted;

    let df_resid = n - p;
    let df_model = p - 1;
    let ssr: f64 = residuals.iter().map(|r| r.powi(2)).sum();
    let sigma2 = ssr / df_resid as f64;

    let std_errors: Array1<f64> = xtx_inv.diag().mapv(|v| (sigma2 * v).max(0.0).sqrt());

    let dist = students_t(df_resid)?;
    let t_values: Array1<f64> = coefficients
        .iter()
        .zip(std_errors.iter())
        .map(|(&b, &se)| {
            if se > 0.0 {
                b / se
            } else if b == 0.0 {
                f64::NAN
            } else {
                b.signum() * f64::INFINITY
            }
        })
        .collect();
    let p_values: Array1<f64> = t_values.mapv(|t| two_sided_p_value(&dist, t));

    let y_mean = y.mean().unwrap_or(0.0);
    let ss_tot: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let r_squared = if ss_tot > 0.0 { (1.0 - ssr / ss_tot).clamp(0.0, 1.0) } else { 0.0 };
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / df_resid as f64;

    let (f_statistic, f_p_value) = f_test(ss_tot - ssr, ssr, df_model, df_resid)?;

    let log_likelihood = -(n as f64) / 2.0 * ((2.0 * PI).ln() + (ssr / n as f64).ln() + 1.0);

    Ok(OlsResult {
        coefficients,
        std_errors,
        t_values,
        p_values,
        fitted,
        residuals,
        r_squared,
        adj_r_squared,
        f_statistic,
        f_p_value,
        log_likelihood,
        ssr,
        nobs: n,
        df_model,
        df_resid,
    })
}

fn students_t(df: usize) -> Result<StudentsT, MathError> {
    StudentsT::new(0.0, 1.0, df as f64).map_err(|e| MathError::Distribution(e.to_string()))
}

fn two_sided_p_value(dist: &StudentsT, t: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    if t.is_infinite() {
        return 0.0;
    }
    (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0)
}

fn f_test(ess: f64, ssr: f64, df_model: usize, df_resid: usize) -> Result<(f64, f64), MathError> {
    if df_model == 0 {
        return Ok((f64::NAN, f64::NAN));
    }
    if ssr == 0.0 {
        return Ok((f64::INFINITY, 0.0));
    }

    let f = (ess.max(0.0) / df_model as f64) / (ssr / df_resid as f64);
    let dist = FisherSnedecor::new(df_model as f64, df_resid as f64)
        .map_err(|e| MathError::Distribution(e.to_string()))?;
    Ok((f, (1.0 - dist.cdf(f)).clamp(0.0, 1.0)))
}
