//! Human-readable interpretation of a fitted model.

use std::fmt;

use derive_more::Display;
use famafrench_traits::FactorKind;

use crate::{FittedModel, TermEstimate};

/// Methodology notes: what the model is, its equation and how to read each coefficient.
pub const MODEL_OVERVIEW: &str = r"## The Fama-French three-factor model

The three-factor model extends the CAPM by explaining a security's return with three sources
of systematic risk:

1. **MKT (market)**: the market index return in excess of the risk-free rate. It captures the
   risk that moves every security.
2. **SMB (small minus big)**: the return of small-cap firms minus that of large-cap firms.
   Small firms have historically earned more, in exchange for more risk.
3. **HML (high minus low)**: the return of high book-to-market (value) firms minus that of low
   book-to-market (growth) firms.

Each estimated coefficient is the security's sensitivity to one factor:

    R_i - R_f = alpha + b_MKT * (R_m - R_f) + b_SMB * SMB + b_HML * HML + e

### Reading the coefficients

- **Intercept (alpha)**: the abnormal return left unexplained by the factors. Positive means the
  security beat what its risk exposures predicted; negative means it fell short.
- **MKT**: positive when the security tends to move with the market, negative when it moves
  against it.
- **SMB**: positive when the security behaves like a small-cap stock, negative when it behaves
  like a large-cap one.
- **HML**: positive when the security behaves like a value stock, negative when it behaves like a
  growth stock.

### Statistics

- **R-squared** is the share of the variation in the security's excess return explained by the
  factors; the closer to 1, the more explanatory power.
- **p-values** test each coefficient against zero. Below the significance level (0.05 by default)
  the factor has a statistically relevant effect on the return.

Factors are equal-weighted bucket averages split at cross-sectional means, and the model is
estimated by ordinary least squares over the whole window.
";

/// Configuration for the interpreter.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// A term is significant when its p-value is strictly below this.
    pub significance_level: f64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { significance_level: 0.05 }
    }
}

/// Sign of a coefficient. Zero reads as negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    /// Strictly above zero.
    #[display("positive")]
    Positive,
    /// Zero or below.
    #[display("negative")]
    Negative,
}

impl Direction {
    /// Direction of `value`.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 { Self::Positive } else { Self::Negative }
    }
}

/// What one coefficient says.
#[derive(Debug, Clone, PartialEq)]
pub struct TermReading {
    /// Display label (`alpha`, `MKT`, `SMB` or `HML`).
    pub label: String,
    /// Estimated coefficient.
    pub coefficient: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// Sign of the coefficient.
    pub direction: Direction,
    /// Whether `p_value` is below the significance level.
    pub significant: bool,
}

impl TermReading {
    fn new(label: impl Into<String>, term: &TermEstimate, significance_level: f64) -> Self {
        Self {
            label: label.into(),
            coefficient: term.coefficient,
            p_value: term.p_value,
            direction: Direction::of(term.coefficient),
            significant: term.p_value < significance_level,
        }
    }

    const fn significance(&self) -> &'static str {
        if self.significant { "significant" } else { "not significant" }
    }
}

/// Structured and rendered interpretation of one fitted model.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// Security the model was fitted for.
    pub symbol: String,
    /// Centered R-squared of the fit.
    pub r_squared: f64,
    /// Intercept reading.
    pub alpha: TermReading,
    /// Factor readings in MKT, SMB, HML order.
    pub factors: Vec<TermReading>,
}

impl Interpretation {
    /// Markdown rendering.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Fama-French analysis for {}:**", self.symbol)?;
        writeln!(f)?;
        writeln!(
            f,
            "The model has an R-squared of {:.3}, meaning roughly {:.1}% of the variation in \
             returns is explained by the factors.",
            self.r_squared,
            self.r_squared * 100.0
        )?;
        writeln!(f)?;

        let a = &self.alpha;
        writeln!(
            f,
            "- The estimated **alpha** is {:.4} (p-value = {:.3}), indicating a **{}** and \
             **{}** abnormal return. This is the return the model's risk factors do not explain.",
            a.coefficient,
            a.p_value,
            a.direction,
            a.significance()
        )?;
        writeln!(f)?;

        for r in &self.factors {
            writeln!(
                f,
                "- The {} coefficient is {:.4} (p-value = {:.3}), indicating a {} and {} \
                 relationship with the security's return.",
                r.label,
                r.coefficient,
                r.p_value,
                r.direction,
                r.significance()
            )?;
        }
        Ok(())
    }
}

/// Turns a fitted model into readings and prose.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
}

impl Interpreter {
    /// Create a new interpreter with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    /// Create a new interpreter with custom configuration.
    #[must_use]
    pub const fn with_config(config: InterpreterConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Interpret `model`. Deterministic: the same model always reads the same.
    #[must_use]
    pub fn interpret(&self, model: &FittedModel) -> Interpretation {
        let level = self.config.significance_level;
        Interpretation {
            symbol: model.symbol.to_string(),
            r_squared: model.r_squared(),
            alpha: TermReading::new("alpha", model.intercept(), level),
            factors: FactorKind::ALL
                .iter()
                .map(|&kind| TermReading::new(kind.to_string(), model.factor(kind), level))
                .collect(),
        }
    }
}
