use smallvec::SmallVec;
use tracing::debug;

use crate::control::config::CusumConfig;
use crate::control::result::{CenterLine, ChartKind, ControlChartResult, SeriesStatistics};
use crate::core::DatedSeries;
use crate::core::stats::{mean, sample_std};
use crate::error::SpcResult;

/// Computes the running cumulative deviation from the series mean.
///
/// `cusum[i] = sum(x[..=i]) - (i + 1) * mean`. The statistic is returned as
/// the secondary series; the raw series and a constant mean line are the
/// primary overlay. No outlier filtering is offered.
pub fn cusum(series: &DatedSeries, config: CusumConfig) -> SpcResult<ControlChartResult> {
    let config = config.validate()?;
    series.require_len(2)?;

    let values = series.values();
    let m = mean(&values);
    let running: Vec<f64> = values
        .iter()
        .scan(0.0, |acc, value| {
            *acc += value;
            Some(*acc)
        })
        .enumerate()
        .map(|(i, cumulative)| cumulative - (i + 1) as f64 * m)
        .collect();

    debug!(
        count = values.len(),
        mean = m,
        beta = config.beta,
        delta = config.delta,
        "computed cusum statistic"
    );

    Ok(ControlChartResult {
        kind: ChartKind::Cusum,
        center_line: Some(CenterLine::Constant(m)),
        thresholds: SmallVec::new(),
        secondary: Some(series.with_values(running)?),
        statistics: Some(SeriesStatistics {
            count: values.len(),
            mean: m,
            std_dev: sample_std(&values),
            month_span: None,
        }),
        display_range: None,
        series: series.clone(),
    })
}
