//! # famafrench
//!
//! Fama-French three-factor model estimation for a single security.
//!
//! This crate provides a unified interface to the famafrench workspace.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Data model
//! - `traits`: Factor and estimator traits
//! - `math`: Cross-sectional means, OLS and linear algebra
//! - `factors`: Universe filter, classifier, SMB/HML/MKT construction
//! - `model`: Regression assembly, estimation, interpretation and the `Session` pipeline
//! - `utils`: Polars frame adapters
//! - `cli`: The `famafrench` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use famafrench::model::Session;
//!
//! let session = Session::new(&returns, &fundamentals, &rates)?;
//! for symbol in session.symbols() {
//!     match session.analyze(symbol.as_str()) {
//!         Ok(analysis) => println!("{}", analysis.interpretation),
//!         Err(e) if e.is_recoverable() => eprintln!("{symbol}: {e}"),
//!         Err(e) => return Err(e.into()),
//!     }
//! }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Used by the `famafrench` binary only.
#[cfg(feature = "cli")]
use {clap as _, polars as _, tracing as _, tracing_subscriber as _};

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use famafrench_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use famafrench_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use famafrench_math as math;
#[cfg(feature = "factors")]
#[doc(inline)]
pub use famafrench_factors as factors;
#[cfg(feature = "model")]
#[doc(inline)]
pub use famafrench_model as model;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use famafrench_utils as utils;
