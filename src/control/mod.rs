//! Statistical process control overlays over a validated `DatedSeries`.
//!
//! Every chart function is pure: it borrows the input series, validates its
//! own configuration, and returns a freshly built `ControlChartResult`.
//! Series validity (ordering, finiteness) is established once, when the
//! `DatedSeries` is constructed.

mod config;
mod cusum;
mod ewma;
mod result;
mod shewhart;

pub use config::{CusumConfig, EwmaConfig, ShewhartConfig};
pub use cusum::cusum;
pub use ewma::ewma;
pub use result::{
    CenterLine, ChartKind, ControlChartResult, SeriesStatistics, ThresholdCurve, ThresholdKind,
};
pub use shewhart::shewhart;

use smallvec::SmallVec;

use crate::core::DatedSeries;

/// Wraps a series without any overlay, for plain time-series charts.
#[must_use]
pub fn plain(series: &DatedSeries) -> ControlChartResult {
    ControlChartResult {
        kind: ChartKind::Plain,
        series: series.clone(),
        center_line: None,
        thresholds: SmallVec::new(),
        secondary: None,
        statistics: None,
        display_range: None,
    }
}
