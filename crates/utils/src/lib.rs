#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/famafrench-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod dates;
pub use dates::{date_column, parse_date};

mod error;
pub use error::UtilsError;

mod frame;
pub use frame::{
    DATE_COLUMN, fundamentals_columns, fundamentals_from_frame, rates_columns, rates_from_frame,
    returns_from_frame,
};
