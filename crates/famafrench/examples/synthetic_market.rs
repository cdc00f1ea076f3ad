//! Run the full pipeline on a simulated market.
//!
//! Securities load on a common market driver with random betas and random
//! fundamentals. Run with `RUST_LOG=debug` to see every stage.

use famafrench::{
    model::{Session, SessionConfig},
    primitives::{AnalysisWindow, Date, FundamentalsRecord, RateSeries, ReturnPanel, Symbol},
};
use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, LogNormal, Normal};
use tracing_subscriber::EnvFilter;

const N_ASSETS: usize = 40;
const N_DATES: usize = 250;
const RISK_FREE: f64 = 0.0004;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let start = Date::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;
    let dates: Vec<Date> =
        std::iter::successors(Some(start), |d| d.succ_opt()).take(N_DATES).collect();
    let end = *dates.last().ok_or("empty calendar")?;

    let symbols: Vec<Symbol> = (0..N_ASSETS).map(|j| Symbol::new(format!("SIM{j:02}"))).collect();
    let caps = LogNormal::new(22.0, 1.5)?;
    let pls = LogNormal::new(2.3, 0.6)?;
    let fundamentals: Vec<FundamentalsRecord> = symbols
        .iter()
        .map(|s| {
            FundamentalsRecord::new(
                s.clone(),
                pls.sample(&mut rng),
                caps.sample(&mut rng),
                end.succ_opt(),
                Some(end),
            )
        })
        .collect();

    let market_noise = Normal::new(0.0, 0.012)?;
    let idio = Normal::new(0.0, 0.01)?;
    let market: Vec<f64> = (0..N_DATES).map(|_| market_noise.sample(&mut rng)).collect();
    let betas: Vec<f64> = (0..N_ASSETS).map(|_| rng.gen_range(0.5..1.5)).collect();
    let values = Array2::from_shape_fn((N_DATES, N_ASSETS), |(i, j)| {
        RISK_FREE + betas[j] * market[i] + idio.sample(&mut rng)
    });

    let returns = ReturnPanel::new(dates.clone(), symbols, values)?;
    let ibov: Array1<f64> = market.iter().map(|m| m + RISK_FREE).collect();
    let rates = RateSeries::new(dates, ibov, Array1::from_elem(N_DATES, RISK_FREE))?;

    let config = SessionConfig::for_window(AnalysisWindow::new(start, end));
    let session = Session::with_config(&returns, &fundamentals, &rates, config)?;

    let c = session.classification();
    println!(
        "universe: {} securities ({} big / {} small, {} high / {} low)\n",
        session.universe().len(),
        c.big.len(),
        c.small.len(),
        c.high.len(),
        c.low.len()
    );

    for symbol in session.symbols().iter().take(3) {
        let analysis = session.analyze(symbol.as_str())?;
        println!("{}\n", analysis.summary());
        println!("{}\n", analysis.interpretation);
    }

    Ok(())
}
