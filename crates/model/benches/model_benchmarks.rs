//! Benchmarks for famafrench-model session building and per-security analysis.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use famafrench_model::{OlsEstimator, Session, SessionConfig, assemble};
use famafrench_primitives::{
    AnalysisWindow, Date, FundamentalsRecord, RateSeries, ReturnPanel, Symbol,
};
use famafrench_traits::ModelEstimator;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};

struct Market {
    returns: ReturnPanel,
    fundamentals: Vec<FundamentalsRecord>,
    rates: RateSeries,
}

/// Consecutive calendar days starting 2020-01-01, `n_assets` securities driven
/// by a common market shock, all passing the universe filter.
fn synthetic_market(n_dates: usize, n_assets: usize) -> Market {
    let mut rng = rand::thread_rng();
    let shock = Normal::new(0.0, 0.01).unwrap();
    let idio = Normal::new(0.0, 0.02).unwrap();

    let start = Date::from_ymd_opt(2020, 1, 1).unwrap();
    let dates: Vec<Date> =
        std::iter::successors(Some(start), |d| d.succ_opt()).take(n_dates).collect();
    let symbols: Vec<Symbol> = (0..n_assets).map(|j| Symbol::new(format!("S{j:04}"))).collect();

    let market: Array1<f64> = (0..n_dates).map(|_| shock.sample(&mut rng)).collect();
    let betas: Vec<f64> = (0..n_assets).map(|_| rng.gen_range(0.5..1.5)).collect();
    let values = Array2::from_shape_fn((n_dates, n_assets), |(i, j)| {
        betas[j] * market[i] + idio.sample(&mut rng)
    });

    let reference = *dates.last().unwrap();
    let fundamentals = symbols
        .iter()
        .map(|s| {
            FundamentalsRecord::new(
                s.clone(),
                rng.gen_range(1.0..30.0),
                rng.gen_range(1e8..1e11),
                reference.succ_opt(),
                Some(reference),
            )
        })
        .collect();

    let risk_free = Array1::from_elem(n_dates, 0.0004);
    Market {
        returns: ReturnPanel::new(dates.clone(), symbols, values).unwrap(),
        fundamentals,
        rates: RateSeries::new(dates, market, risk_free).unwrap(),
    }
}

fn config_for(data: &Market) -> SessionConfig {
    let dates = data.returns.dates();
    let window = AnalysisWindow::new(dates[0], dates[dates.len() - 1]);
    SessionConfig::for_window(window)
}

fn bench_session_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_build");
    group.sample_size(20);

    for (n_dates, n_assets) in [(250, 100), (1250, 100), (1250, 400)] {
        group.throughput(Throughput::Elements((n_dates * n_assets) as u64));
        group.bench_with_input(
            BenchmarkId::new("dates_assets", format!("{n_dates}x{n_assets}")),
            &(n_dates, n_assets),
            |b, &(n_dates, n_assets)| {
                let data = synthetic_market(n_dates, n_assets);
                let config = config_for(&data);
                b.iter(|| {
                    Session::with_config(
                        black_box(&data.returns),
                        black_box(&data.fundamentals),
                        black_box(&data.rates),
                        config.clone(),
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for n_dates in [250, 1250] {
        let data = synthetic_market(n_dates, 100);
        let session =
            Session::with_config(&data.returns, &data.fundamentals, &data.rates, config_for(&data))
                .unwrap();
        let symbol = session.symbols()[0].clone();

        group.bench_with_input(BenchmarkId::new("full", n_dates), &n_dates, |b, _| {
            b.iter(|| session.analyze(black_box(symbol.as_str())).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("assemble_fit", n_dates), &n_dates, |b, _| {
            let estimator = OlsEstimator::new();
            b.iter(|| {
                let table =
                    assemble(session.returns(), session.factors(), symbol.as_str()).unwrap();
                estimator.fit(black_box(&table)).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_session_build, bench_analyze);
criterion_main!(benches);
