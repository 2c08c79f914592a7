use smallvec::smallvec;
use tracing::debug;

use crate::control::config::ShewhartConfig;
use crate::control::result::{
    CenterLine, ChartKind, ControlChartResult, SeriesStatistics, ThresholdCurve, ThresholdKind,
};
use crate::core::DatedSeries;
use crate::core::stats::{mean, sample_std, tukey_fence};
use crate::error::SpcResult;

/// Spread, in standard deviations, of the suggested display range.
const DISPLAY_RANGE_SIGMA: f64 = 5.0;

/// Padding applied to a zero-variance display range; the relative part keeps
/// it above float spacing for large magnitudes.
const DEGENERATE_RANGE_RELATIVE_PAD: f64 = 1e-9;
const DEGENERATE_RANGE_MIN_PAD: f64 = 1e-5;

/// Computes Shewhart warning/action limits.
///
/// With `filter_outliers`, points outside the Tukey fence of the raw values
/// are dropped first and every statistic (and the returned series) uses the
/// reduced series. Zero variance collapses all four limits onto the mean.
pub fn shewhart(series: &DatedSeries, config: ShewhartConfig) -> SpcResult<ControlChartResult> {
    let config = config.validate()?;
    series.require_len(2)?;

    let series = if config.filter_outliers {
        let (low, high) = tukey_fence(&series.values());
        let filtered = series.filter_values(|value| value >= low && value <= high);
        debug!(
            original = series.len(),
            kept = filtered.len(),
            fence_low = low,
            fence_high = high,
            "applied tukey fence"
        );
        filtered
    } else {
        series.clone()
    };
    series.require_len(2)?;

    let values = series.values();
    let m = mean(&values);
    let s = sample_std(&values);
    let len = series.len();
    debug!(count = len, mean = m, std_dev = s, "computed shewhart statistics");

    let warning = config.warning_sigma * s;
    let action = config.action_sigma * s;

    let observed_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let observed_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = (m + DISPLAY_RANGE_SIGMA * s).max(observed_max);
    let y_min = (m - DISPLAY_RANGE_SIGMA * s).min(observed_min);
    let y_max = if y_max == y_min {
        y_max + (y_max.abs() * DEGENERATE_RANGE_RELATIVE_PAD).max(DEGENERATE_RANGE_MIN_PAD)
    } else {
        y_max
    };

    Ok(ControlChartResult {
        kind: ChartKind::Shewhart,
        center_line: Some(CenterLine::Constant(m)),
        thresholds: smallvec![
            ThresholdCurve::constant(ThresholdKind::WarningUpper, m + warning, len),
            ThresholdCurve::constant(ThresholdKind::WarningLower, m - warning, len),
            ThresholdCurve::constant(ThresholdKind::ActionUpper, m + action, len),
            ThresholdCurve::constant(ThresholdKind::ActionLower, m - action, len),
        ],
        secondary: None,
        statistics: Some(SeriesStatistics {
            count: len,
            mean: m,
            std_dev: s,
            month_span: None,
        }),
        display_range: Some((y_min, y_max)),
        series,
    })
}
