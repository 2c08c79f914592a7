use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::control::{ChartKind, ThresholdKind};
use crate::error::{SpcError, SpcResult};

use super::format::{
    AxisFrequency, TickFormatDescriptor, TickSpec, YAxisFormat, axis_tick_spec, format_for,
};
use super::spec::ChartPresentationSpec;

/// Named colors shared by every chart.
pub const PALETTE: [&str; 5] = [
    "purple",
    "darkgreen",
    "mediumslateblue",
    "darkorange",
    "red",
];

pub const SECONDARY_AXIS_TITLE: &str = "Cumulative sum vs average";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    Solid,
    Dash,
    Dot,
}

/// How the renderer should draw a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveShape {
    /// Point-by-point trace.
    Trace,
    /// Full-width horizontal rule at a constant value.
    HorizontalRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxisSide {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "threshold", rename_all = "snake_case")]
pub enum CurveRole {
    Primary,
    Center,
    Threshold(ThresholdKind),
    Secondary,
    Forecast,
    IntervalLower,
    IntervalUpper,
}

/// Style hints; colors are CSS color names or `rgba(...)` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub color: String,
    pub width: f64,
    pub dash: LineDash,
    pub show_legend: bool,
    /// Fill color between this curve and the previous one.
    #[serde(default)]
    pub fill_to_previous: Option<String>,
}

impl CurveStyle {
    #[must_use]
    pub fn new(color: &str, width: f64, dash: LineDash) -> Self {
        Self {
            color: color.to_owned(),
            width,
            dash,
            show_legend: false,
            fill_to_previous: None,
        }
    }

    #[must_use]
    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, color: &str) -> Self {
        self.fill_to_previous = Some(color.to_owned());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentedCurve {
    pub name: String,
    pub role: CurveRole,
    pub shape: CurveShape,
    pub axis: YAxisSide,
    pub times: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
    pub style: CurveStyle,
    #[serde(default)]
    pub annotation: Option<String>,
}

impl PresentedCurve {
    pub fn validate(&self) -> SpcResult<()> {
        if self.times.len() != self.values.len() {
            return Err(SpcError::InvalidSeries(format!(
                "curve `{}` has {} times but {} values",
                self.name,
                self.times.len(),
                self.values.len()
            )));
        }
        if self.values.iter().any(|value| !value.is_finite()) {
            return Err(SpcError::InvalidSeries(format!(
                "curve `{}` contains non-finite values",
                self.name
            )));
        }
        if !self.style.width.is_finite() || self.style.width <= 0.0 {
            return Err(SpcError::InvalidParameter(format!(
                "curve `{}` width must be finite and > 0",
                self.name
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Auto,
    Left,
    Center,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleLayout {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub x_anchor: Anchor,
    pub y_anchor: Anchor,
    pub font_size: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub x: f64,
    pub x_anchor: Anchor,
    pub y_anchor: Anchor,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub show_grid: bool,
    pub grid_width: f64,
    pub grid_color: String,
    pub line_color: String,
    pub mirror: bool,
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_width: 1.0,
            grid_color: "lightgrey".to_owned(),
            line_color: "black".to_owned(),
            mirror: true,
            title_font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisLayout {
    pub title: String,
    pub ticks: TickSpec,
    pub style: AxisStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisLayout {
    pub title: String,
    pub format: TickFormatDescriptor,
    pub style: AxisStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryAxisLayout {
    pub title: String,
    pub color: String,
}

/// Which primary axis an `update_axis` call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn from_name(name: &str) -> SpcResult<Self> {
        match name {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            other => Err(SpcError::InvalidParameter(format!(
                "axis must be `x` or `y`, got `{other}`"
            ))),
        }
    }
}

/// Partial title update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleUpdate {
    pub text: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub font_size: Option<f64>,
    pub color: Option<String>,
}

/// Partial legend update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendUpdate {
    pub x: Option<f64>,
    pub x_anchor: Option<Anchor>,
    pub y_anchor: Option<Anchor>,
    pub visible: Option<bool>,
}

/// Partial axis update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisUpdate {
    pub title: Option<String>,
    pub show_grid: Option<bool>,
    pub grid_color: Option<String>,
    pub line_color: Option<String>,
    pub mirror: Option<bool>,
    pub title_font_size: Option<f64>,
}

/// Renderer-facing bundle: named curves plus layout.
///
/// Curves keep insertion order, which is also legend/draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentedChart {
    pub kind: ChartKind,
    pub spec: ChartPresentationSpec,
    pub title: TitleLayout,
    pub legend: LegendLayout,
    pub x_axis: XAxisLayout,
    pub y_axis: YAxisLayout,
    #[serde(default)]
    pub secondary_axis: Option<SecondaryAxisLayout>,
    pub curves: IndexMap<String, PresentedCurve>,
    #[serde(default)]
    pub display_range: Option<(f64, f64)>,
}

impl PresentedChart {
    /// Empty chart with the default layout for `kind`.
    #[must_use]
    pub fn new(kind: ChartKind, spec: ChartPresentationSpec) -> Self {
        let mut chart = Self {
            kind,
            title: default_title(&spec.title),
            legend: default_legend(kind),
            x_axis: XAxisLayout {
                title: spec.x_label.clone(),
                ticks: axis_tick_spec(AxisFrequency::Default),
                style: AxisStyle::default(),
            },
            y_axis: YAxisLayout {
                title: spec.y_label.clone(),
                format: format_for(spec.y_format),
                style: AxisStyle::default(),
            },
            secondary_axis: None,
            curves: IndexMap::new(),
            display_range: None,
            spec,
        };
        if kind == ChartKind::Cusum {
            chart.secondary_axis = Some(default_secondary_axis());
        }
        chart
    }

    /// Inserts or replaces a curve under `key`.
    pub fn push_curve(&mut self, key: impl Into<String>, curve: PresentedCurve) {
        self.curves.insert(key.into(), curve);
    }

    #[must_use]
    pub fn curve(&self, key: &str) -> Option<&PresentedCurve> {
        self.curves.get(key)
    }

    /// Curves in draw order.
    #[must_use]
    pub fn traces(&self) -> Vec<&PresentedCurve> {
        self.curves.values().collect()
    }

    pub fn update_xaxis_frequency(&mut self, frequency: AxisFrequency) {
        self.x_axis.ticks = axis_tick_spec(frequency);
    }

    pub fn update_yaxis_format(&mut self, y_format: YAxisFormat) {
        self.spec.y_format = y_format;
        self.y_axis.format = format_for(y_format);
    }

    pub fn update_legend(&mut self, update: LegendUpdate) {
        if let Some(x) = update.x {
            self.legend.x = x;
        }
        if let Some(anchor) = update.x_anchor {
            self.legend.x_anchor = anchor;
        }
        if let Some(anchor) = update.y_anchor {
            self.legend.y_anchor = anchor;
        }
        if let Some(visible) = update.visible {
            self.legend.visible = visible;
        }
    }

    /// Updates the title layout; a new text is mirrored into `spec.title`.
    pub fn update_title(&mut self, update: TitleUpdate) {
        if let Some(text) = update.text {
            self.spec.title = text.clone();
            self.title.text = text;
        }
        if let Some(x) = update.x {
            self.title.x = x;
        }
        if let Some(y) = update.y {
            self.title.y = y;
        }
        if let Some(font_size) = update.font_size {
            self.title.font_size = font_size;
        }
        if let Some(color) = update.color {
            self.title.color = color;
        }
    }

    /// Updates one primary axis; a new title is mirrored into the stored label.
    pub fn update_axis(&mut self, axis: Axis, update: AxisUpdate) {
        let (title, style, label) = match axis {
            Axis::X => (
                &mut self.x_axis.title,
                &mut self.x_axis.style,
                &mut self.spec.x_label,
            ),
            Axis::Y => (
                &mut self.y_axis.title,
                &mut self.y_axis.style,
                &mut self.spec.y_label,
            ),
        };
        if let Some(text) = update.title {
            label.clone_from(&text);
            *title = text;
        }
        if let Some(show_grid) = update.show_grid {
            style.show_grid = show_grid;
        }
        if let Some(grid_color) = update.grid_color {
            style.grid_color = grid_color;
        }
        if let Some(line_color) = update.line_color {
            style.line_color = line_color;
        }
        if let Some(mirror) = update.mirror {
            style.mirror = mirror;
        }
        if let Some(font_size) = update.title_font_size {
            style.title_font_size = font_size;
        }
    }

    /// Restores title, legend and axis layout derived from the current spec.
    ///
    /// Curves are kept; the y tick format is kept as last requested.
    pub fn reset_layout(&mut self) {
        self.title = default_title(&self.spec.title);
        self.legend = default_legend(self.kind);
        self.x_axis = XAxisLayout {
            title: self.spec.x_label.clone(),
            ticks: axis_tick_spec(AxisFrequency::Default),
            style: AxisStyle::default(),
        };
        self.y_axis.title = self.spec.y_label.clone();
        self.y_axis.style = AxisStyle::default();
        if self.secondary_axis.is_some() {
            self.secondary_axis = Some(default_secondary_axis());
        }
    }

    pub fn validate(&self) -> SpcResult<()> {
        for curve in self.curves.values() {
            curve.validate()?;
        }
        if let Some((low, high)) = self.display_range {
            if !low.is_finite() || !high.is_finite() || low >= high {
                return Err(SpcError::InvalidParameter(
                    "display range must be finite with low < high".to_owned(),
                ));
            }
        }
        let needs_secondary = self
            .curves
            .values()
            .any(|curve| curve.axis == YAxisSide::Secondary);
        if needs_secondary && self.secondary_axis.is_none() {
            return Err(SpcError::InvalidParameter(
                "secondary-axis curve without a secondary axis layout".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_title(text: &str) -> TitleLayout {
    TitleLayout {
        text: text.to_owned(),
        x: 0.5,
        y: 0.9,
        x_anchor: Anchor::Center,
        y_anchor: Anchor::Bottom,
        font_size: 20.0,
        color: "black".to_owned(),
    }
}

fn default_legend(kind: ChartKind) -> LegendLayout {
    match kind {
        ChartKind::Cusum => LegendLayout {
            x: 0.9,
            x_anchor: Anchor::Auto,
            y_anchor: Anchor::Auto,
            visible: true,
        },
        _ => LegendLayout {
            x: 0.5,
            x_anchor: Anchor::Center,
            y_anchor: Anchor::Auto,
            visible: true,
        },
    }
}

fn default_secondary_axis() -> SecondaryAxisLayout {
    SecondaryAxisLayout {
        title: SECONDARY_AXIS_TITLE.to_owned(),
        color: PALETTE[2].to_owned(),
    }
}
