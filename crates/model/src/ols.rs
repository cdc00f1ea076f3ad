//! Three-factor OLS estimation.

use famafrench_math::{MathError, OlsResult, ordinary_least_squares};
use famafrench_primitives::{Date, REGRESSORS, RegressionTable, Symbol};
use famafrench_traits::{EstimatorError, FactorKind, ModelEstimator};
use ndarray::Array1;
use tracing::{debug, info};

/// Configuration for the OLS estimator.
#[derive(Debug, Clone)]
pub struct OlsConfig {
    /// Coverage of the reported coefficient intervals.
    pub confidence_level: f64,
}

impl Default for OlsConfig {
    fn default() -> Self {
        Self { confidence_level: 0.95 }
    }
}

/// One row of the coefficient table.
#[derive(Debug, Clone, PartialEq)]
pub struct TermEstimate {
    /// Regressor name (`const`, `mkt`, `smb` or `hml`).
    pub name: &'static str,
    /// Estimated coefficient.
    pub coefficient: f64,
    /// Standard error.
    pub std_error: f64,
    /// t-statistic against zero.
    pub t_value: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// Lower bound of the confidence interval.
    pub conf_low: f64,
    /// Upper bound of the confidence interval.
    pub conf_high: f64,
}

/// A fitted three-factor model for one security.
#[derive(Debug, Clone)]
pub struct FittedModel {
    /// Security the model was fitted for.
    pub symbol: Symbol,
    /// Observation dates, aligned with `observed` and `fitted`.
    pub dates: Vec<Date>,
    /// Excess returns used as the target.
    pub observed: Array1<f64>,
    /// Coefficient table in regressor order, intercept first.
    pub terms: Vec<TermEstimate>,
    /// Coverage of the intervals in `terms`.
    pub confidence_level: f64,
    stats: OlsResult,
}

impl FittedModel {
    /// The intercept (alpha).
    #[must_use]
    pub fn intercept(&self) -> &TermEstimate {
        &self.terms[0]
    }

    /// The loading on one factor.
    #[must_use]
    pub fn factor(&self, kind: FactorKind) -> &TermEstimate {
        let position = match kind {
            FactorKind::Market => 1,
            FactorKind::Size => 2,
            FactorKind::Value => 3,
        };
        &self.terms[position]
    }

    /// Look a term up by regressor name.
    #[must_use]
    pub fn term(&self, name: &str) -> Option<&TermEstimate> {
        self.terms.iter().find(|t| t.name == name)
    }

    /// Fitted values, one per observation.
    #[must_use]
    pub const fn fitted(&self) -> &Array1<f64> {
        &self.stats.fitted
    }

    /// Residuals, one per observation.
    #[must_use]
    pub const fn residuals(&self) -> &Array1<f64> {
        &self.stats.residuals
    }

    /// Centered R-squared.
    #[must_use]
    pub const fn r_squared(&self) -> f64 {
        self.stats.r_squared
    }

    /// Number of observations.
    #[must_use]
    pub const fn nobs(&self) -> usize {
        self.stats.nobs
    }

    /// Full fit statistics.
    #[must_use]
    pub const fn stats(&self) -> &OlsResult {
        &self.stats
    }
}

/// Fits excess return on `[1, MKT, SMB, HML]` by ordinary least squares.
#[derive(Debug, Clone)]
pub struct OlsEstimator {
    config: OlsConfig,
}

impl OlsEstimator {
    /// Create a new estimator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(OlsConfig::default())
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &OlsConfig {
        &self.config
    }
}

impl Default for OlsEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelEstimator for OlsEstimator {
    type Config = OlsConfig;
    type Output = FittedModel;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn fit(&self, table: &RegressionTable) -> Result<FittedModel, EstimatorError> {
        let level = self.config.confidence_level;
        if !(level > 0.0 && level < 1.0) {
            return Err(EstimatorError::InvalidConfig(format!(
                "confidence level {level} not in (0, 1)"
            )));
        }
        if table.is_empty() {
            return Err(EstimatorError::InsufficientData {
                required: REGRESSORS.len() + 1,
                actual: 0,
            });
        }

        let design = table.design_matrix();
        debug!(symbol = %table.symbol, rows = table.len(), "fitting ols");

        let stats =
            ordinary_least_squares(table.target(), &design).map_err(|e| estimator_error(e, table))?;
        let intervals =
            stats.confidence_intervals(level).map_err(|e| estimator_error(e, table))?;

        let terms = REGRESSORS
            .iter()
            .zip(intervals)
            .enumerate()
            .map(|(i, (&name, (conf_low, conf_high)))| TermEstimate {
                name,
                coefficient: stats.coefficients[i],
                std_error: stats.std_errors[i],
                t_value: stats.t_values[i],
                p_value: stats.p_values[i],
                conf_low,
                conf_high,
            })
            .collect();

        info!(
            symbol = %table.symbol,
            nobs = stats.nobs,
            r_squared = stats.r_squared,
            "fitted three-factor model"
        );

        Ok(FittedModel {
            symbol: table.symbol.clone(),
            dates: table.dates.clone(),
            observed: table.target().clone(),
            terms,
            confidence_level: level,
            stats,
        })
    }
}

fn estimator_error(err: MathError, table: &RegressionTable) -> EstimatorError {
    match err {
        MathError::InsufficientObservations { observations, parameters } => {
            EstimatorError::InsufficientObservations { observations, parameters }
        }
        MathError::Singular { rank, columns } => EstimatorError::RankDeficient { rank, columns },
        MathError::EmptyData => {
            EstimatorError::InsufficientData { required: REGRESSORS.len() + 1, actual: 0 }
        }
        MathError::DimensionMismatch { expected, actual } => EstimatorError::DimensionMismatch {
            expected,
            actual,
            context: format!("design matrix for {}", table.symbol),
        },
        other => EstimatorError::LinearAlgebra(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use famafrench_primitives::RegressionRow;

    use super::*;

    /// excess = 0.001 + 1.2 mkt + 0.5 smb - 0.3 hml plus an alternating wobble.
    fn table(n: u32) -> RegressionTable {
        let rows = (0..n).map(|i| {
            let t = f64::from(i);
            let mkt = (t * 0.7).sin() * 0.02;
            let smb = (t * 1.3).cos() * 0.01;
            let hml = ((t * 0.4).sin() - 0.2) * 0.015;
            let wobble = if i % 2 == 0 { 1e-4 } else { -1e-4 };
            RegressionRow {
                date: Date::from_yo_opt(2024, i + 1).unwrap(),
                raw_return: 0.001 + 1.2 * mkt + 0.5 * smb - 0.3 * hml + wobble + 0.0002,
                risk_free: 0.0002,
                mkt,
                smb,
                hml,
            }
        });
        RegressionTable::from_rows("A".into(), rows)
    }

    #[test]
    fn recovers_loadings() {
        let model = OlsEstimator::new().fit(&table(120)).unwrap();

        assert_relative_eq!(model.intercept().coefficient, 0.001, epsilon = 1e-4);
        assert_relative_eq!(model.factor(FactorKind::Market).coefficient, 1.2, epsilon = 1e-2);
        assert_relative_eq!(model.factor(FactorKind::Size).coefficient, 0.5, epsilon = 2e-2);
        assert_relative_eq!(model.factor(FactorKind::Value).coefficient, -0.3, epsilon = 2e-2);
        assert!(model.factor(FactorKind::Market).p_value < 0.05);
        assert!(model.r_squared() > 0.9 && model.r_squared() <= 1.0);
    }

    #[test]
    fn fitted_values_align_with_table() {
        let table = table(40);
        let model = OlsEstimator::new().fit(&table).unwrap();

        assert_eq!(model.dates, table.dates);
        assert_eq!(model.fitted().len(), table.len());
        for i in 0..table.len() {
            assert_relative_eq!(
                model.observed[i],
                model.fitted()[i] + model.residuals()[i],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn terms_follow_regressor_order() {
        let model = OlsEstimator::new().fit(&table(30)).unwrap();
        let names: Vec<&str> = model.terms.iter().map(|t| t.name).collect();
        assert_eq!(names, REGRESSORS.to_vec());
        assert_eq!(model.term("smb"), Some(model.factor(FactorKind::Size)));
        assert!(model.term("mom").is_none());

        for term in &model.terms {
            assert!(term.conf_low <= term.coefficient && term.coefficient <= term.conf_high);
        }
    }

    #[test]
    fn four_rows_are_rank_deficient() {
        let err = OlsEstimator::new().fit(&table(4)).unwrap_err();
        assert!(err.is_rank_deficiency());
        assert!(matches!(
            err,
            EstimatorError::InsufficientObservations { observations: 4, parameters: 4 }
        ));
    }

    #[test]
    fn constant_factor_is_rank_deficient() {
        let rows = (0..10u32).map(|i| RegressionRow {
            date: Date::from_yo_opt(2024, i + 1).unwrap(),
            raw_return: f64::from(i) * 0.001,
            risk_free: 0.0,
            mkt: f64::from(i) * 0.002,
            smb: 0.0,
            hml: 0.01,
        });
        let table = RegressionTable::from_rows("A".into(), rows);

        let err = OlsEstimator::new().fit(&table).unwrap_err();
        assert!(matches!(err, EstimatorError::RankDeficient { columns: 4, .. }));
    }

    #[test]
    fn empty_table_is_insufficient_data() {
        let table = RegressionTable::from_rows("A".into(), std::iter::empty());
        let err = OlsEstimator::new().fit(&table).unwrap_err();
        assert!(matches!(err, EstimatorError::InsufficientData { actual: 0, .. }));
    }

    #[test]
    fn invalid_confidence_level() {
        let estimator = OlsEstimator::with_config(OlsConfig { confidence_level: 1.5 });
        let err = estimator.fit(&table(30)).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidConfig(_)));
    }
}
