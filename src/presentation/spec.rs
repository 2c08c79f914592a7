use serde::{Deserialize, Serialize};

use super::format::YAxisFormat;

/// Chart intent handed to the renderer alongside the computed overlays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartPresentationSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend entry for the primary series.
    pub legend_label: String,
    #[serde(default)]
    pub y_format: YAxisFormat,
}

impl ChartPresentationSpec {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        legend_label: impl Into<String>,
        y_format: YAxisFormat,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            legend_label: legend_label.into(),
            y_format,
        }
    }
}
