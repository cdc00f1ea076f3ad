//! Plain-text regression summary.

use std::fmt;

use crate::FittedModel;

const WIDTH: usize = 78;

/// Borrowed view of a fitted model that renders as a regression report.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    model: &'a FittedModel,
}

impl FittedModel {
    /// Text report with fit statistics and the coefficient table.
    #[must_use]
    pub const fn summary(&self) -> Summary<'_> {
        Summary { model: self }
    }
}

/// Left label and right-aligned value, packed into half the report width.
fn cell(label: &str, value: &str) -> String {
    let half = WIDTH / 2 - 1;
    let pad = half.saturating_sub(label.len());
    format!("{label}{value:>pad$}")
}

fn row(f: &mut fmt::Formatter<'_>, left: (&str, String), right: (&str, String)) -> fmt::Result {
    writeln!(f, "{}   {}", cell(left.0, &left.1), cell(right.0, &right.1))
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.model;
        let s = m.stats();
        let heavy = "=".repeat(WIDTH);
        let light = "-".repeat(WIDTH);

        let period = match (m.dates.first(), m.dates.last()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => String::new(),
        };

        writeln!(f, "{:^WIDTH$}", "OLS Regression Results")?;
        writeln!(f, "{heavy}")?;
        row(
            f,
            ("Dep. Variable:", "excess_return".to_string()),
            ("R-squared:", format!("{:.3}", s.r_squared)),
        )?;
        row(
            f,
            ("Model:", "OLS".to_string()),
            ("Adj. R-squared:", format!("{:.3}", s.adj_r_squared)),
        )?;
        row(
            f,
            ("Method:", "Least Squares".to_string()),
            ("F-statistic:", format!("{:.4}", s.f_statistic)),
        )?;
        row(
            f,
            ("Security:", m.symbol.to_string()),
            ("Prob (F-statistic):", format!("{:.3e}", s.f_p_value)),
        )?;
        row(f, ("Period:", period), ("Log-Likelihood:", format!("{:.2}", s.log_likelihood)))?;
        row(f, ("No. Observations:", s.nobs.to_string()), ("AIC:", format!("{:.2}", s.aic())))?;
        row(f, ("Df Residuals:", s.df_resid.to_string()), ("BIC:", format!("{:.2}", s.bic())))?;
        writeln!(f, "{}", cell("Df Model:", &s.df_model.to_string()))?;
        writeln!(f, "{heavy}")?;

        let tail = (1.0 - m.confidence_level) / 2.0;
        writeln!(
            f,
            "{:<10}{:>10} {:>10} {:>10} {:>10} {:>12} {:>12}",
            "",
            "coef",
            "std err",
            "t",
            "P>|t|",
            format!("[{tail:.3}"),
            format!("{:.3}]", 1.0 - tail),
        )?;
        writeln!(f, "{light}")?;
        for t in &m.terms {
            writeln!(
                f,
                "{:<10}{:>10.4} {:>10.3} {:>10.3} {:>10.3} {:>12.4} {:>12.4}",
                t.name, t.coefficient, t.std_error, t.t_value, t.p_value, t.conf_low, t.conf_high
            )?;
        }
        writeln!(f, "{heavy}")?;
        writeln!(f, "{}", cell("Durbin-Watson:", &format!("{:.3}", s.durbin_watson())))?;
        write!(f, "{heavy}")
    }
}
