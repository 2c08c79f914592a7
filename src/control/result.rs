use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DatedSeries;

/// Chart family that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Plain,
    Shewhart,
    Ewma,
    Cusum,
}

/// Role of a threshold curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    WarningUpper,
    WarningLower,
    ActionUpper,
    ActionLower,
    /// Dynamic EWMA tolerance band, upper side.
    ControlUpper,
    /// Dynamic EWMA tolerance band, lower side.
    ControlLower,
}

impl ThresholdKind {
    #[must_use]
    pub fn is_upper(self) -> bool {
        matches!(
            self,
            Self::WarningUpper | Self::ActionUpper | Self::ControlUpper
        )
    }
}

/// Threshold values index-aligned with the plotted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCurve {
    pub kind: ThresholdKind,
    pub values: Vec<f64>,
}

impl ThresholdCurve {
    #[must_use]
    pub fn constant(kind: ThresholdKind, value: f64, len: usize) -> Self {
        Self {
            kind,
            values: vec![value; len],
        }
    }

    /// Returns the shared value when every entry is identical.
    #[must_use]
    pub fn constant_value(&self) -> Option<f64> {
        let first = *self.values.first()?;
        self.values
            .iter()
            .all(|value| *value == first)
            .then_some(first)
    }
}

/// Center line of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CenterLine {
    Constant(f64),
    Series(Vec<f64>),
}

impl CenterLine {
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            Self::Series(values) => values.get(index).copied(),
        }
    }
}

/// Summary statistics the overlays were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// Month buckets used as the EWMA variance divisor.
    #[serde(default)]
    pub month_span: Option<u32>,
}

/// Overlay bundle emitted by every chart function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlChartResult {
    pub kind: ChartKind,
    /// Series to plot: filtered for Shewhart, smoothed for EWMA, raw otherwise.
    pub series: DatedSeries,
    pub center_line: Option<CenterLine>,
    pub thresholds: SmallVec<[ThresholdCurve; 4]>,
    /// Unitless secondary series (the running CUSUM statistic).
    pub secondary: Option<DatedSeries>,
    pub statistics: Option<SeriesStatistics>,
    /// Suggested y-range for plotting, when the chart defines one.
    #[serde(default)]
    pub display_range: Option<(f64, f64)>,
}

impl ControlChartResult {
    #[must_use]
    pub fn threshold(&self, kind: ThresholdKind) -> Option<&ThresholdCurve> {
        self.thresholds.iter().find(|curve| curve.kind == kind)
    }

    /// Indices where the plotted series lies strictly outside the given pair
    /// of threshold curves. Empty when either curve is absent.
    #[must_use]
    pub fn excursions(&self, upper: ThresholdKind, lower: ThresholdKind) -> Vec<usize> {
        let (Some(upper), Some(lower)) = (self.threshold(upper), self.threshold(lower)) else {
            return Vec::new();
        };
        self.series
            .points()
            .iter()
            .zip(upper.values.iter().zip(&lower.values))
            .enumerate()
            .filter(|(_, (point, (hi, lo)))| point.value > **hi || point.value < **lo)
            .map(|(index, _)| index)
            .collect()
    }

    /// `true` when every threshold curve has one value per plotted point.
    #[must_use]
    pub fn is_index_aligned(&self) -> bool {
        let len = self.series.len();
        let centre_ok = match &self.center_line {
            Some(CenterLine::Series(values)) => values.len() == len,
            _ => true,
        };
        let secondary_ok = self.secondary.as_ref().is_none_or(|s| s.len() == len);
        centre_ok
            && secondary_ok
            && self.thresholds.iter().all(|curve| curve.values.len() == len)
    }
}
