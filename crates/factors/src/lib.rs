#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/famafrench-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod builder;
pub use builder::FactorBuilder;

mod classify;
pub use classify::classify;

mod error;
pub use error::ConstructionError;

mod market;
pub use market::market_premium;

mod size;
pub use size::SizeFactor;

mod spread;

mod universe;
pub use universe::{UniverseConfig, UniverseFilter};

mod value;
pub use value::ValueFactor;
