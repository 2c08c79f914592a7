use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{SpcError, SpcResult};

/// One `(timestamp, value)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedPoint {
    pub time: NaiveDateTime,
    pub value: f64,
}

impl DatedPoint {
    #[must_use]
    pub fn new(time: NaiveDateTime, value: f64) -> Self {
        Self { time, value }
    }

    /// Builds a point stamped at midnight of `date`.
    #[must_use]
    pub fn on_date(date: NaiveDate, value: f64) -> Self {
        Self {
            time: date.and_time(chrono::NaiveTime::MIN),
            value,
        }
    }
}

/// Validated, chronologically ordered series of dated values.
///
/// Invariants (checked once, at construction):
/// - timestamps strictly increase (no duplicates, no reordering)
/// - every value is finite
///
/// Chart functions rely on these invariants and never re-check them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<DatedPoint>", into = "Vec<DatedPoint>")]
pub struct DatedSeries {
    points: Vec<DatedPoint>,
}

impl DatedSeries {
    pub fn new(points: Vec<DatedPoint>) -> SpcResult<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.value.is_finite() {
                return Err(SpcError::InvalidSeries(format!(
                    "value at index {index} must be finite"
                )));
            }
        }

        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].time <= pair[0].time)
        {
            let (prev, next) = (points[index].time, points[index + 1].time);
            let reason = if prev == next {
                "duplicate timestamp"
            } else {
                "timestamps out of chronological order"
            };
            return Err(SpcError::InvalidSeries(format!(
                "{reason} at index {}: {prev} then {next}",
                index + 1
            )));
        }

        Ok(Self { points })
    }

    pub fn from_pairs<I>(pairs: I) -> SpcResult<Self>
    where
        I: IntoIterator<Item = (NaiveDateTime, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(time, value)| DatedPoint::new(time, value))
                .collect(),
        )
    }

    /// Builds a daily series; each value is stamped at midnight of its date.
    pub fn from_dates<I>(pairs: I) -> SpcResult<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, value)| DatedPoint::on_date(date, value))
                .collect(),
        )
    }

    /// Keeps the points whose value satisfies `keep`.
    ///
    /// A subsequence of a valid series is itself valid, so no re-validation
    /// happens here.
    #[must_use]
    pub fn filter_values(&self, mut keep: impl FnMut(f64) -> bool) -> Self {
        Self {
            points: self
                .points
                .iter()
                .copied()
                .filter(|point| keep(point.value))
                .collect(),
        }
    }

    /// Replaces values index-by-index while keeping the timestamps.
    pub(crate) fn with_values(&self, values: Vec<f64>) -> SpcResult<Self> {
        if values.len() != self.points.len() {
            return Err(SpcError::InvalidSeries(format!(
                "replacement values length {} does not match series length {}",
                values.len(),
                self.points.len()
            )));
        }
        let points = self
            .points
            .iter()
            .zip(values)
            .map(|(point, value)| DatedPoint::new(point.time, value))
            .collect();
        Self::new(points)
    }

    pub fn require_len(&self, required: usize) -> SpcResult<()> {
        if self.points.len() < required {
            return Err(SpcError::InsufficientData {
                required,
                actual: self.points.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[DatedPoint] {
        &self.points
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    #[must_use]
    pub fn times(&self) -> Vec<NaiveDateTime> {
        self.points.iter().map(|point| point.time).collect()
    }

    #[must_use]
    pub fn first(&self) -> Option<DatedPoint> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<DatedPoint> {
        self.points.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<DatedPoint>> for DatedSeries {
    type Error = SpcError;

    fn try_from(points: Vec<DatedPoint>) -> SpcResult<Self> {
        Self::new(points)
    }
}

impl From<DatedSeries> for Vec<DatedPoint> {
    fn from(series: DatedSeries) -> Self {
        series.points
    }
}
