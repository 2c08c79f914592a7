use chrono::NaiveDateTime;
use tracing::debug;

use crate::control::{CenterLine, ChartKind, ControlChartResult, ThresholdKind};
use crate::core::DatedSeries;

use super::chart::{
    CurveRole, CurveShape, CurveStyle, LineDash, PALETTE, PresentedChart, PresentedCurve,
    YAxisSide,
};
use super::spec::ChartPresentationSpec;

pub const SERIES_KEY: &str = "series";
pub const CENTER_KEY: &str = "center";
pub const SECONDARY_KEY: &str = "cusum";

const SERIES_WIDTH: f64 = 2.0;

/// Pairs computed overlays with chart intent for an external renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesPresenter;

impl SeriesPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn present(
        &self,
        result: &ControlChartResult,
        spec: &ChartPresentationSpec,
    ) -> PresentedChart {
        let mut chart = PresentedChart::new(result.kind, spec.clone());
        let times = result.series.times();

        chart.push_curve(
            SERIES_KEY,
            series_curve(&spec.legend_label, &result.series, PALETTE[0]),
        );

        if let Some(center) = &result.center_line {
            chart.push_curve(CENTER_KEY, center_curve(result.kind, center, &times));
        }

        for threshold in &result.thresholds {
            chart.push_curve(
                threshold_key(threshold.kind),
                PresentedCurve {
                    name: threshold_key(threshold.kind).to_owned(),
                    role: CurveRole::Threshold(threshold.kind),
                    shape: threshold_shape(result.kind),
                    axis: YAxisSide::Primary,
                    times: times.clone(),
                    values: threshold.values.clone(),
                    style: CurveStyle::new(
                        threshold_color(threshold.kind),
                        SERIES_WIDTH,
                        LineDash::Dash,
                    ),
                    annotation: None,
                },
            );
        }

        if let Some(secondary) = &result.secondary {
            chart.push_curve(
                SECONDARY_KEY,
                PresentedCurve {
                    name: SECONDARY_KEY.to_owned(),
                    role: CurveRole::Secondary,
                    shape: CurveShape::Trace,
                    axis: YAxisSide::Secondary,
                    times: secondary.times(),
                    values: secondary.values(),
                    style: CurveStyle::new(PALETTE[2], SERIES_WIDTH, LineDash::Solid),
                    annotation: None,
                },
            );
        }

        chart.display_range = result.display_range;
        debug!(
            kind = ?result.kind,
            curves = chart.curves.len(),
            points = result.series.len(),
            "presented chart"
        );
        chart
    }
}

pub(crate) fn series_curve(label: &str, series: &DatedSeries, color: &str) -> PresentedCurve {
    PresentedCurve {
        name: label.to_owned(),
        role: CurveRole::Primary,
        shape: CurveShape::Trace,
        axis: YAxisSide::Primary,
        times: series.times(),
        values: series.values(),
        style: CurveStyle::new(color, SERIES_WIDTH, LineDash::Solid).with_legend(),
        annotation: None,
    }
}

fn center_curve(kind: ChartKind, center: &CenterLine, times: &[NaiveDateTime]) -> PresentedCurve {
    let (values, shape) = match center {
        CenterLine::Constant(value) => (vec![*value; times.len()], CurveShape::HorizontalRule),
        CenterLine::Series(values) => (values.clone(), CurveShape::Trace),
    };
    // CUSUM draws an annotated dashed average; the limit charts a plain solid one.
    let (dash, annotation) = match kind {
        ChartKind::Cusum => (LineDash::Dash, Some("Average".to_owned())),
        _ => (LineDash::Solid, None),
    };
    PresentedCurve {
        name: CENTER_KEY.to_owned(),
        role: CurveRole::Center,
        shape,
        axis: YAxisSide::Primary,
        times: times.to_vec(),
        values,
        style: CurveStyle::new(PALETTE[1], SERIES_WIDTH, dash),
        annotation,
    }
}

fn threshold_shape(kind: ChartKind) -> CurveShape {
    match kind {
        ChartKind::Ewma => CurveShape::Trace,
        _ => CurveShape::HorizontalRule,
    }
}

fn threshold_color(kind: ThresholdKind) -> &'static str {
    match kind {
        ThresholdKind::ActionUpper | ThresholdKind::ActionLower => PALETTE[4],
        ThresholdKind::WarningUpper
        | ThresholdKind::WarningLower
        | ThresholdKind::ControlUpper
        | ThresholdKind::ControlLower => PALETTE[3],
    }
}

#[must_use]
pub fn threshold_key(kind: ThresholdKind) -> &'static str {
    match kind {
        ThresholdKind::WarningUpper => "warning_upper",
        ThresholdKind::WarningLower => "warning_lower",
        ThresholdKind::ActionUpper => "action_upper",
        ThresholdKind::ActionLower => "action_lower",
        ThresholdKind::ControlUpper => "control_upper",
        ThresholdKind::ControlLower => "control_lower",
    }
}
