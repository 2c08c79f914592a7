use smallvec::smallvec;
use tracing::debug;

use crate::control::config::EwmaConfig;
use crate::control::result::{
    CenterLine, ChartKind, ControlChartResult, SeriesStatistics, ThresholdCurve, ThresholdKind,
};
use crate::core::DatedSeries;
use crate::core::stats::{mean, month_span, sample_std};
use crate::error::SpcResult;

/// Computes the EWMA-smoothed series with its dynamic control band.
///
/// `ewma[0] = x[0]`, `ewma[i] = a * x[i] + (1 - a) * ewma[i - 1]`.
/// The band at 1-based position `i` is
/// `mean +/- (L * s / sqrt(n)) * sqrt(a / (2 - a) * (1 - (1 - a)^(2i)))`
/// with `s` the raw standard deviation and `n` the number of calendar months
/// spanned by the series.
pub fn ewma(series: &DatedSeries, config: EwmaConfig) -> SpcResult<ControlChartResult> {
    let config = config.validate()?;
    series.require_len(2)?;

    let values = series.values();
    let alpha = config.smoothing_factor;
    let m = mean(&values);
    let s = sample_std(&values);

    let points = series.points();
    let months = month_span(points[0].time.date(), points[points.len() - 1].time.date());

    let smoothed = smooth(&values, alpha);

    let asymptote = config.control_multiple * s / f64::from(months).sqrt();
    let (upper, lower): (Vec<f64>, Vec<f64>) = (1..=values.len())
        .map(|i| {
            let tolerance = asymptote * band_factor(alpha, i);
            (m + tolerance, m - tolerance)
        })
        .unzip();

    debug!(
        count = values.len(),
        mean = m,
        std_dev = s,
        months,
        alpha,
        "computed ewma overlay"
    );

    Ok(ControlChartResult {
        kind: ChartKind::Ewma,
        series: series.with_values(smoothed)?,
        center_line: Some(CenterLine::Constant(m)),
        thresholds: smallvec![
            ThresholdCurve {
                kind: ThresholdKind::ControlUpper,
                values: upper,
            },
            ThresholdCurve {
                kind: ThresholdKind::ControlLower,
                values: lower,
            },
        ],
        secondary: None,
        statistics: Some(SeriesStatistics {
            count: values.len(),
            mean: m,
            std_dev: s,
            month_span: Some(months),
        }),
        display_range: None,
    })
}

/// `sqrt(a / (2 - a) * (1 - (1 - a)^(2i)))` for the 1-based position `i`.
fn band_factor(alpha: f64, position: usize) -> f64 {
    let decay = 1.0 - alpha;
    let ratio = alpha / (2.0 - alpha);
    (ratio * (1.0 - decay.powf(2.0 * position as f64))).sqrt()
}

/// Strictly sequential scan; each point depends on the previous one.
fn smooth(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut previous = None;
    for &value in values {
        let next = match previous {
            None => value,
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
        };
        out.push(next);
        previous = Some(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{band_factor, smooth};

    #[test]
    fn smooth_starts_at_first_value() {
        let out = smooth(&[4.0, 8.0, 0.0], 0.5);
        assert_eq!(out, vec![4.0, 6.0, 3.0]);
    }

    #[test]
    fn smooth_with_unit_alpha_is_identity() {
        let values = [1.0, -2.0, 3.5];
        assert_eq!(smooth(&values, 1.0), values.to_vec());
    }

    #[test]
    fn band_factor_matches_first_step_and_saturates_for_far_positions() {
        assert!((band_factor(0.3, 1) - 0.3).abs() < 1e-12);

        let limit = (0.3f64 / 1.7).sqrt();
        let far = band_factor(0.3, 3_000_000_000);
        assert!(far.is_finite());
        assert!((far - limit).abs() < 1e-12);
        assert!(band_factor(0.3, 10) < far);
    }
}
