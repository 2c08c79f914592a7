//! Forecasting collaborator contract.
//!
//! The model math lives in an external library; this module fixes the
//! interface the dashboard/report code programs against, the error metric
//! used by `evaluate`, and the chart overlay for a forecast.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::control::ChartKind;
use crate::core::DatedSeries;
use crate::error::{SpcError, SpcResult};
use crate::presentation::{
    ChartPresentationSpec, CurveRole, CurveShape, CurveStyle, LineDash, PALETTE, PresentedChart,
    PresentedCurve, SERIES_KEY, YAxisSide, series_curve,
};

/// Coverage used for the forecast band when none is requested.
pub const DEFAULT_INTERVAL_COVERAGE: f64 = 0.9;

pub const FORECAST_KEY: &str = "forecast";
pub const INTERVAL_LOWER_KEY: &str = "interval_lower";
pub const INTERVAL_UPPER_KEY: &str = "interval_upper";

const INTERVAL_FILL: &str = "rgba(255, 0, 0, 0.2)";

/// ARIMA `(p, d, q)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArimaOrder {
    /// Autoregressive order.
    pub p: u32,
    /// Differencing order.
    pub d: u32,
    /// Moving-average order.
    pub q: u32,
}

impl Default for ArimaOrder {
    fn default() -> Self {
        Self { p: 1, d: 1, q: 1 }
    }
}

impl ArimaOrder {
    #[must_use]
    pub fn new(p: u32, d: u32, q: u32) -> Self {
        Self { p, d, q }
    }
}

/// Prediction band at one horizon step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastInterval {
    pub time: NaiveDateTime,
    pub lower: f64,
    pub upper: f64,
}

/// Univariate forecaster fitted on a training series.
///
/// `predict*` and `evaluate` must return `SpcError::ModelNotFitted` before a
/// successful `fit`.
pub trait Forecaster {
    fn order(&self) -> ArimaOrder;

    fn fit(&mut self, train: &DatedSeries) -> SpcResult<()>;

    fn is_fitted(&self) -> bool;

    /// Point forecasts at the absolute `horizon` timestamps.
    fn predict(&self, horizon: &[NaiveDateTime]) -> SpcResult<DatedSeries>;

    /// Prediction intervals with nominal `coverage` in `(0, 1)`.
    fn predict_interval(
        &self,
        horizon: &[NaiveDateTime],
        coverage: f64,
    ) -> SpcResult<Vec<ForecastInterval>>;

    /// MAPE of the forecast over the test series' timestamps.
    fn evaluate(&self, test: &DatedSeries) -> SpcResult<f64> {
        if !self.is_fitted() {
            return Err(SpcError::ModelNotFitted);
        }
        let predictions = self.predict(&test.times())?;
        mean_absolute_percentage_error(test, &predictions)
    }
}

pub fn validate_coverage(coverage: f64) -> SpcResult<f64> {
    if !coverage.is_finite() || coverage <= 0.0 || coverage >= 1.0 {
        return Err(SpcError::InvalidParameter(format!(
            "coverage must be in (0, 1), got {coverage}"
        )));
    }
    Ok(coverage)
}

/// Mean of `|actual - predicted| / max(|actual|, eps)`, as a fraction.
pub fn mean_absolute_percentage_error(
    actual: &DatedSeries,
    predicted: &DatedSeries,
) -> SpcResult<f64> {
    if actual.len() != predicted.len() {
        return Err(SpcError::InvalidSeries(format!(
            "actual has {} points but predicted has {}",
            actual.len(),
            predicted.len()
        )));
    }
    actual.require_len(1)?;

    let total: f64 = actual
        .points()
        .iter()
        .zip(predicted.points())
        .map(|(a, p)| (a.value - p.value).abs() / a.value.abs().max(f64::EPSILON))
        .sum();
    Ok(total / actual.len() as f64)
}

/// Builds the observed-plus-forecast chart.
///
/// `observed` is drawn as the primary series, the forecast dotted, and the
/// interval as a filled dashed band. Interval rows must line up with the
/// forecast timestamps.
pub fn forecast_overlay(
    observed: &DatedSeries,
    forecast: &DatedSeries,
    intervals: &[ForecastInterval],
    spec: &ChartPresentationSpec,
) -> SpcResult<PresentedChart> {
    if intervals.len() != forecast.len() {
        return Err(SpcError::InvalidSeries(format!(
            "{} intervals for {} forecast points",
            intervals.len(),
            forecast.len()
        )));
    }
    for (interval, point) in intervals.iter().zip(forecast.points()) {
        if interval.time != point.time {
            return Err(SpcError::InvalidSeries(format!(
                "interval at {} does not match forecast at {}",
                interval.time, point.time
            )));
        }
        if !interval.lower.is_finite() || !interval.upper.is_finite() {
            return Err(SpcError::InvalidSeries(
                "interval bounds must be finite".to_owned(),
            ));
        }
        if interval.lower > interval.upper {
            return Err(SpcError::InvalidSeries(format!(
                "interval at {} has lower > upper",
                interval.time
            )));
        }
    }

    let mut chart = PresentedChart::new(ChartKind::Plain, spec.clone());
    chart.push_curve(
        SERIES_KEY,
        series_curve(&spec.legend_label, observed, PALETTE[0]),
    );

    let times = forecast.times();
    chart.push_curve(
        FORECAST_KEY,
        PresentedCurve {
            name: "Forecast".to_owned(),
            role: CurveRole::Forecast,
            shape: CurveShape::Trace,
            axis: YAxisSide::Primary,
            times: times.clone(),
            values: forecast.values(),
            style: CurveStyle::new(PALETTE[1], 2.0, LineDash::Dot).with_legend(),
            annotation: None,
        },
    );
    chart.push_curve(
        INTERVAL_LOWER_KEY,
        PresentedCurve {
            name: INTERVAL_LOWER_KEY.to_owned(),
            role: CurveRole::IntervalLower,
            shape: CurveShape::Trace,
            axis: YAxisSide::Primary,
            times: times.clone(),
            values: intervals.iter().map(|i| i.lower).collect(),
            style: CurveStyle::new(PALETTE[3], 1.0, LineDash::Dash),
            annotation: None,
        },
    );
    chart.push_curve(
        INTERVAL_UPPER_KEY,
        PresentedCurve {
            name: INTERVAL_UPPER_KEY.to_owned(),
            role: CurveRole::IntervalUpper,
            shape: CurveShape::Trace,
            axis: YAxisSide::Primary,
            times,
            values: intervals.iter().map(|i| i.upper).collect(),
            style: CurveStyle::new(PALETTE[3], 1.0, LineDash::Dash).with_fill(INTERVAL_FILL),
            annotation: None,
        },
    );
    Ok(chart)
}
