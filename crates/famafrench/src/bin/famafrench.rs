//! Fama-French three-factor CLI.
//!
//! Reads returns, fundamentals and rates tables (CSV or Parquet), builds the
//! session factors and analyses one security.
//!
//! Usage:
//! `famafrench --returns retornos.parquet --fundamentals dados_fundamentus.parquet
//!  --rates taxas.parquet --symbol PETR4`

use std::{error::Error, fs::File, path::Path, path::PathBuf, process::ExitCode};

use clap::Parser;
use famafrench::{
    model::{Analysis, InterpreterConfig, MODEL_OVERVIEW, ModelError, Session, SessionConfig},
    primitives::{AnalysisWindow, Date},
    utils::{DATE_COLUMN, fundamentals_from_frame, rates_from_frame, returns_from_frame},
};
use polars::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "famafrench")]
#[command(about = "Fama-French three-factor model for a single security", long_about = None)]
#[command(version)]
struct Cli {
    /// Returns table: a date column plus one column per security
    #[arg(long)]
    returns: PathBuf,

    /// Fundamentals table: Papel, pl, market_cap, ult_preco, ult_balanco
    #[arg(long)]
    fundamentals: PathBuf,

    /// Rates table: a date column plus ibov and selic
    #[arg(long)]
    rates: PathBuf,

    /// Security to analyse
    #[arg(long, required_unless_present = "list")]
    symbol: Option<String>,

    /// First date of the analysis window
    #[arg(long, default_value = "2020-01-01")]
    start: Date,

    /// Last date of the analysis window
    #[arg(long, default_value = "2024-12-31")]
    end: Date,

    /// Universe reference date (defaults to --end)
    #[arg(long)]
    reference: Option<Date>,

    /// Name of the date column in the returns and rates tables
    #[arg(long, default_value = DATE_COLUMN)]
    date_column: String,

    /// Significance level used by the interpretation
    #[arg(long, default_value_t = 0.05)]
    significance: f64,

    /// List the securities that can be analysed and exit
    #[arg(long)]
    list: bool,

    /// Print the fitted-vs-observed coordinates as CSV
    #[arg(long)]
    points: bool,

    /// Print the methodology notes
    #[arg(long)]
    explain: bool,
}

/// Exit code for conditions that leave nothing to report but are not failures.
const INSUFFICIENT_DATA_EXIT: u8 = 2;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let returns = returns_from_frame(&read_table(&cli.returns)?, &cli.date_column)?;
    let fundamentals = fundamentals_from_frame(&read_table(&cli.fundamentals)?)?;
    let rates = rates_from_frame(&read_table(&cli.rates)?, &cli.date_column)?;

    let mut config = SessionConfig::for_window(AnalysisWindow::new(cli.start, cli.end));
    if let Some(reference) = cli.reference {
        config.universe.reference_date = reference;
    }
    config.interpreter = InterpreterConfig { significance_level: cli.significance };

    let session = match Session::with_config(&returns, &fundamentals, &rates, config) {
        Ok(session) => session,
        Err(e) => return warn_or_fail(e),
    };

    if cli.list {
        for symbol in session.symbols() {
            println!("{symbol}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let Some(symbol) = cli.symbol else {
        return Err("--symbol is required".into());
    };

    match session.analyze(&symbol) {
        Ok(analysis) => print_analysis(&analysis, cli.points),
        Err(e) => return warn_or_fail(e),
    }

    if cli.explain {
        println!("\n{MODEL_OVERVIEW}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Report a recoverable condition as a warning; anything else is fatal.
fn warn_or_fail(e: ModelError) -> Result<ExitCode, Box<dyn Error>> {
    if e.is_recoverable() {
        eprintln!("Warning: {e}");
        Ok(ExitCode::from(INSUFFICIENT_DATA_EXIT))
    } else {
        Err(e.into())
    }
}

/// Read a CSV or Parquet file, chosen by extension.
fn read_table(path: &Path) -> PolarsResult<DataFrame> {
    info!(path = %path.display(), "reading table");
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet" | "pq") => ParquetReader::new(File::open(path)?).finish(),
        _ => CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish(),
    }
}

fn print_analysis(analysis: &Analysis, points: bool) {
    println!("{}\n", analysis.summary());
    println!("{}", analysis.interpretation);

    if points {
        let comparison = analysis.comparison();
        println!("# {}", comparison.title);
        println!("fitted,observed");
        for p in &comparison.points {
            println!("{},{}", p.fitted, p.observed);
        }
        let (from, to) = comparison.reference;
        println!("# 45-degree line: ({0},{0}) to ({1},{1})", from.fitted, to.fitted);
    }
}

#[cfg(test)]
mod tests {
    use famafrench::primitives::{FundamentalsRecord, RateSeries, ReturnPanel, Symbol};
    use ndarray::{Array1, array};

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_universe_is_a_warning() {
        let dates = vec![d(2024, 12, 30), d(2024, 12, 31)];
        let returns =
            ReturnPanel::new(dates.clone(), vec!["A".into()], array![[0.01], [0.02]]).unwrap();
        let rates = RateSeries::new(dates, array![0.01, 0.0], Array1::zeros(2)).unwrap();
        // Negative price-to-earnings fails the universe filter.
        let fundamentals = vec![FundamentalsRecord::new(
            Symbol::new("A"),
            -2.0,
            100.0,
            Some(d(2025, 1, 2)),
            Some(d(2024, 12, 31)),
        )];

        let err = Session::new(&returns, &fundamentals, &rates).unwrap_err();
        let code = warn_or_fail(err).unwrap();
        assert_eq!(code, ExitCode::from(INSUFFICIENT_DATA_EXIT));
    }

    #[test]
    fn invalid_config_is_fatal() {
        let err = ModelError::InvalidConfig("window ends before it starts".to_string());
        assert!(warn_or_fail(err).is_err());
    }
}
