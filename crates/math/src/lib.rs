#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/famafrench-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod cross_section;
pub use cross_section::{cross_sectional_mean, group_mean, long_short_spread};

mod linalg;
pub use linalg::{RANK_TOLERANCE, invert, matrix_rank};

mod ols;
pub use ols::{OlsResult, ordinary_least_squares};

mod error;
pub use error::MathError;
