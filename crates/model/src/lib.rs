#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/famafrench-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod assemble;
pub use assemble::assemble;

mod comparison;
pub use comparison::{FitComparison, Point};

mod error;
pub use error::ModelError;

mod interpret;
pub use interpret::{
    Direction, Interpretation, Interpreter, InterpreterConfig, MODEL_OVERVIEW, TermReading,
};

mod ols;
pub use ols::{FittedModel, OlsConfig, OlsEstimator, TermEstimate};

mod session;
pub use session::{Analysis, Session, SessionConfig, Stage};

mod summary;
pub use summary::Summary;

/// Re-export commonly used types.
pub mod prelude {
    pub use famafrench_traits::ModelEstimator;

    pub use super::{Analysis, ModelError, OlsEstimator, Session, SessionConfig};
}
