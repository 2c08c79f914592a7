//! Aggregate statistics shared by the control charts.
//!
//! All helpers operate on plain value slices; callers are responsible for
//! length checks (see `DatedSeries::require_len`).

use chrono::{Datelike, NaiveDate};

#[cfg(feature = "parallel-stats")]
use rayon::prelude::*;

/// Multiplier applied to the interquartile range for Tukey fences.
pub const TUKEY_FENCE_MULTIPLIER: f64 = 1.5;

#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    #[cfg(feature = "parallel-stats")]
    {
        values.par_iter().sum()
    }

    #[cfg(not(feature = "parallel-stats"))]
    {
        values.iter().sum()
    }
}

/// Arithmetic mean. Returns `NaN` for an empty slice.
///
/// Accumulates deviations from the first value so a constant series yields
/// that constant exactly.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    let Some(&pivot) = values.first() else {
        return f64::NAN;
    };
    let deviations: Vec<f64> = values.iter().map(|value| value - pivot).collect();
    pivot + sum(&deviations) / values.len() as f64
}

/// Sample standard deviation (`n - 1` denominator). Returns `NaN` for `n < 2`.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);

    #[cfg(feature = "parallel-stats")]
    let squared: f64 = values.par_iter().map(|v| (v - m) * (v - m)).sum();
    #[cfg(not(feature = "parallel-stats"))]
    let squared: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();

    (squared / (values.len() - 1) as f64).sqrt()
}

/// Quantile with linear interpolation between the two closest ranks.
///
/// `q` is clamped into `[0, 1]`. Returns `NaN` for an empty slice.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

/// Inclusive `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]` bounds.
#[must_use]
pub fn tukey_fence(values: &[f64]) -> (f64, f64) {
    let lower_q = quantile(values, 0.25);
    let upper_q = quantile(values, 0.75);
    let iqr = upper_q - lower_q;
    (
        lower_q - TUKEY_FENCE_MULTIPLIER * iqr,
        upper_q + TUKEY_FENCE_MULTIPLIER * iqr,
    )
}

/// Number of calendar months touched by `[start, end]`, both ends included.
///
/// Dates inside the same month count as one month. Reversed inputs are
/// swapped.
#[must_use]
pub fn month_span(start: NaiveDate, end: NaiveDate) -> u32 {
    let (start, end) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    let index = |date: NaiveDate| i64::from(date.year()) * 12 + i64::from(date.month0());
    (index(end) - index(start) + 1) as u32
}
