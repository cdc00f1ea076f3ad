//! Tolerant date parsing.

use chrono::{DateTime, NaiveDateTime};
use famafrench_primitives::Date;
use polars::prelude::*;
use tracing::warn;

use crate::UtilsError;

/// Day number of 1970-01-01 counted from 0001-01-01 (day 1).
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a date written in any of the common layouts.
///
/// Accepts ISO dates, day-first dates with `/` or `-`, compact `YYYYMMDD`,
/// and datetimes (the time part is discarded). Anything else is `None`.
#[must_use]
pub fn parse_date(value: &str) -> Option<Date> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| Date::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

fn from_epoch_days(days: i32) -> Option<Date> {
    Date::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

fn from_timestamp(value: i64, unit: TimeUnit) -> Option<Date> {
    let dt = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value)?,
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value)?,
        TimeUnit::Nanoseconds => DateTime::from_timestamp_nanos(value),
    };
    Some(dt.date_naive())
}

/// Read a column as dates.
///
/// `Date`, `Datetime` and string columns are supported. Nulls and strings that
/// do not parse become `None`; the number of unparsable strings is logged.
///
/// # Errors
/// Returns `UtilsError::MissingColumn` if `name` is absent and
/// `UtilsError::UnsupportedType` for any other column type.
pub fn date_column(df: &DataFrame, name: &str) -> Result<Vec<Option<Date>>, UtilsError> {
    let series = df
        .column(name)
        .map_err(|_| UtilsError::MissingColumn(name.to_string()))?
        .as_materialized_series();

    match series.dtype() {
        DataType::Date => {
            let days = series.cast(&DataType::Int32)?;
            Ok(days.i32()?.into_iter().map(|d| d.and_then(from_epoch_days)).collect())
        }
        DataType::Datetime(unit, _) => {
            let unit = *unit;
            let stamps = series.cast(&DataType::Int64)?;
            Ok(stamps
                .i64()?
                .into_iter()
                .map(|v| v.and_then(|v| from_timestamp(v, unit)))
                .collect())
        }
        DataType::String => {
            let mut unparsable = 0usize;
            let dates = series
                .str()?
                .into_iter()
                .map(|v| {
                    let parsed = v.and_then(parse_date);
                    if v.is_some() && parsed.is_none() {
                        unparsable += 1;
                    }
                    parsed
                })
                .collect();
            if unparsable > 0 {
                warn!(column = name, unparsable, "unparsable dates read as missing");
            }
            Ok(dates)
        }
        other => Err(UtilsError::UnsupportedType {
            column: name.to_string(),
            dtype: other.to_string(),
        }),
    }
}
