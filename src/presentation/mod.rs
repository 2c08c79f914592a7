//! Renderer-facing adapters: tick/format lookup tables and the
//! `PresentedChart` bundle built from a `ControlChartResult`.

mod chart;
mod format;
mod json_contract;
mod presenter;
mod renderer;
mod spec;

pub use chart::{
    Anchor, Axis, AxisStyle, AxisUpdate, CurveRole, CurveShape, CurveStyle, LegendLayout,
    LegendUpdate, LineDash, PALETTE, PresentedChart, PresentedCurve, SECONDARY_AXIS_TITLE,
    SecondaryAxisLayout, TitleLayout, TitleUpdate, XAxisLayout, YAxisLayout, YAxisSide,
};
pub use format::{
    AxisFrequency, TickFormatDescriptor, TickInterval, TickSpec, YAxisFormat, axis_tick_spec,
    format_for, format_for_name, weekly_tick_anchor,
};
pub use json_contract::{PRESENTED_CHART_JSON_SCHEMA_V1, PresentedChartJsonContractV1};
pub use presenter::{CENTER_KEY, SECONDARY_KEY, SERIES_KEY, SeriesPresenter, threshold_key};
pub use renderer::{ChartRenderer, NullRenderer};
pub use spec::ChartPresentationSpec;

pub(crate) use presenter::series_curve;
