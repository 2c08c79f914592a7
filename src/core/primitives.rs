use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SpcError, SpcResult};

pub const SECONDS_PER_DAY: u32 = 86_400;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> SpcResult<f64> {
    value.to_f64().ok_or_else(|| {
        SpcError::InvalidSeries(format!("{field_name} cannot be represented as f64"))
    })
}

/// Seconds elapsed since midnight of the timestamp's own calendar day.
#[must_use]
pub fn seconds_since_midnight(time: NaiveDateTime) -> u32 {
    time.time().num_seconds_from_midnight()
}

/// Epoch seconds of midnight at the start of `date`.
#[must_use]
pub fn midnight_epoch_seconds(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}

pub fn naive_from_epoch_seconds(seconds: i64) -> SpcResult<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| {
            SpcError::InvalidSeries(format!("epoch seconds {seconds} are out of range"))
        })
}
