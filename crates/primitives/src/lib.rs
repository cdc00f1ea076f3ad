#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/famafrench-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod asset;
pub use asset::Symbol;

mod classification;
pub use classification::{Classification, SizeBucket, ValueBucket};

mod error;
pub use error::DataError;

mod factor;
pub use factor::{FactorSeries, MarketFactorSeries, StyleFactorSeries};

mod fundamentals;
pub use fundamentals::FundamentalsRecord;

mod rates;
pub use rates::RateSeries;

mod returns;
pub use returns::ReturnPanel;

mod table;
pub use table::{REGRESSORS, RegressionRow, RegressionTable};

mod window;
pub use window::AnalysisWindow;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
