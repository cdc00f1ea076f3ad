//! End-to-end pipeline: session-wide factors, per-security analysis.

use derive_more::Display;
use famafrench_factors::{FactorBuilder, UniverseConfig, UniverseFilter, classify};
use famafrench_primitives::{
    AnalysisWindow, Classification, FactorSeries, FundamentalsRecord, RateSeries,
    RegressionTable, ReturnPanel, Symbol,
};
use famafrench_traits::ModelEstimator;
use tracing::info;

use crate::{
    FitComparison, FittedModel, Interpretation, Interpreter, InterpreterConfig, ModelError,
    OlsConfig, OlsEstimator, assemble,
};

/// Pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    /// Nothing started.
    Idle,
    /// Windowing returns and filtering fundamentals.
    Filtering,
    /// Splitting the universe into buckets.
    Classifying,
    /// Building SMB, HML and MKT.
    FactorBuilding,
    /// Joining one security with the factors.
    Assembling,
    /// No complete observation for the security. Terminal.
    Empty,
    /// Fitting OLS.
    Estimating,
    /// Rendering the interpretation.
    Interpreting,
    /// Analysis complete.
    Done,
}

fn enter(stage: Stage, symbol: Option<&str>) {
    info!(%stage, symbol = symbol.unwrap_or("-"), "pipeline stage");
}

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Analysis window applied to returns and rates.
    pub window: AnalysisWindow,
    /// Universe selection rules.
    pub universe: UniverseConfig,
    /// Coefficient interval coverage.
    pub estimator: OlsConfig,
    /// Significance threshold for the interpretation.
    pub interpreter: InterpreterConfig,
}

impl SessionConfig {
    /// Defaults for `window`, with the universe reference date at the window end.
    #[must_use]
    pub fn for_window(window: AnalysisWindow) -> Self {
        Self {
            universe: UniverseConfig { reference_date: window.end, ..UniverseConfig::default() },
            window,
            estimator: OlsConfig::default(),
            interpreter: InterpreterConfig::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_window(AnalysisWindow::default())
    }
}

/// Everything produced for one selected security.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Regression-ready data.
    pub table: RegressionTable,
    /// Fitted model.
    pub model: FittedModel,
    /// Readings and prose.
    pub interpretation: Interpretation,
}

impl Analysis {
    /// Plain-text regression report.
    #[must_use]
    pub fn summary(&self) -> String {
        self.model.summary().to_string()
    }

    /// Fitted versus observed scatter with its 45° line.
    #[must_use]
    pub fn comparison(&self) -> FitComparison {
        FitComparison::new(&self.model)
    }
}

/// Inputs filtered and factors derived once, then analysed per security.
///
/// Building a session runs filtering, classification and factor
/// construction. [`Session::analyze`] only reads that state.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    returns: ReturnPanel,
    universe: Vec<FundamentalsRecord>,
    classification: Classification,
    factors: FactorSeries,
    estimator: OlsEstimator,
    interpreter: Interpreter,
}

impl Session {
    /// Build a session with default configuration.
    ///
    /// # Errors
    /// See [`Session::with_config`].
    pub fn new(
        returns: &ReturnPanel,
        fundamentals: &[FundamentalsRecord],
        rates: &RateSeries,
    ) -> Result<Self, ModelError> {
        Self::with_config(returns, fundamentals, rates, SessionConfig::default())
    }

    /// Build a session.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfig` for an empty window,
    /// `ModelError::InsufficientData` when no security passes the universe
    /// filter, and `ModelError::Construction` if factor construction fails.
    pub fn with_config(
        returns: &ReturnPanel,
        fundamentals: &[FundamentalsRecord],
        rates: &RateSeries,
        config: SessionConfig,
    ) -> Result<Self, ModelError> {
        if config.window.is_empty() {
            return Err(ModelError::InvalidConfig(format!(
                "window ends ({}) before it starts ({})",
                config.window.end, config.window.start
            )));
        }
        enter(Stage::Idle, None);

        enter(Stage::Filtering, None);
        let returns = UniverseFilter::prepare_returns(returns, &config.window);
        let rates = rates.restrict(&config.window);
        let universe =
            UniverseFilter::with_config(config.universe.clone()).filter(fundamentals, &returns);
        if universe.is_empty() {
            return Err(ModelError::InsufficientData(format!(
                "no security passed the universe filter at {}",
                config.universe.reference_date
            )));
        }
        info!(securities = universe.len(), "universe selected");

        enter(Stage::Classifying, None);
        let classification = classify(&universe);

        enter(Stage::FactorBuilding, None);
        let factors = FactorBuilder::new().build(&returns, &classification, &rates)?;

        Ok(Self {
            estimator: OlsEstimator::with_config(config.estimator.clone()),
            interpreter: Interpreter::with_config(config.interpreter.clone()),
            config,
            returns,
            universe,
            classification,
            factors,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Securities that can be analysed: every column of the windowed returns panel.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        self.returns.symbols()
    }

    /// Windowed, gap-free returns panel.
    #[must_use]
    pub const fn returns(&self) -> &ReturnPanel {
        &self.returns
    }

    /// Fundamentals that passed the universe filter.
    #[must_use]
    pub fn universe(&self) -> &[FundamentalsRecord] {
        &self.universe
    }

    /// Size and value buckets.
    #[must_use]
    pub const fn classification(&self) -> &Classification {
        &self.classification
    }

    /// SMB, HML and MKT.
    #[must_use]
    pub const fn factors(&self) -> &FactorSeries {
        &self.factors
    }

    /// Assemble, fit and interpret one security.
    ///
    /// # Errors
    /// Returns `ModelError::UnknownSecurity` for a symbol outside the panel,
    /// `ModelError::InsufficientData` when no complete observation remains and
    /// `ModelError::Estimator` when the fit is refused. All three leave the
    /// session usable.
    pub fn analyze(&self, symbol: &str) -> Result<Analysis, ModelError> {
        enter(Stage::Assembling, Some(symbol));
        let table = assemble(&self.returns, &self.factors, symbol)?;
        if table.is_empty() {
            enter(Stage::Empty, Some(symbol));
            return Err(ModelError::InsufficientData(format!(
                "no complete observation for {symbol} in the window"
            )));
        }

        enter(Stage::Estimating, Some(symbol));
        let model = self.estimator.fit(&table)?;

        enter(Stage::Interpreting, Some(symbol));
        let interpretation = self.interpreter.interpret(&model);

        enter(Stage::Done, Some(symbol));
        Ok(Analysis { table, model, interpretation })
    }
}

#[cfg(test)]
mod tests {
    use famafrench_primitives::Date;

    use super::*;

    #[test]
    fn config_reference_follows_window() {
        let window = AnalysisWindow::new(
            Date::from_ymd_opt(2021, 1, 1).unwrap(),
            Date::from_ymd_opt(2021, 12, 31).unwrap(),
        );
        let config = SessionConfig::for_window(window);
        assert_eq!(config.universe.reference_date, window.end);
        assert_eq!(config.interpreter.significance_level, 0.05);
    }

    #[test]
    fn default_config_uses_default_window() {
        let config = SessionConfig::default();
        assert_eq!(config.window, AnalysisWindow::default());
        assert_eq!(config.universe.reference_date, AnalysisWindow::default().end);
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::FactorBuilding.to_string(), "FactorBuilding");
        assert_eq!(Stage::Empty.to_string(), "Empty");
    }
}
