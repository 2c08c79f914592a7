use serde::{Deserialize, Serialize};

use crate::control::{CusumConfig, EwmaConfig, ShewhartConfig};
use crate::core::TimeAxisConfig;
use crate::error::SpcResult;

/// Aggregate configuration for dashboards and report jobs.
///
/// Serializable so host applications can persist/load their chart setup;
/// every missing field falls back to its documented default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpcConfig {
    #[serde(default)]
    pub time_axis: TimeAxisConfig,
    #[serde(default)]
    pub shewhart: ShewhartConfig,
    #[serde(default)]
    pub ewma: EwmaConfig,
    #[serde(default)]
    pub cusum: CusumConfig,
}

impl SpcConfig {
    #[must_use]
    pub fn with_time_axis(mut self, time_axis: TimeAxisConfig) -> Self {
        self.time_axis = time_axis;
        self
    }

    #[must_use]
    pub fn with_shewhart(mut self, shewhart: ShewhartConfig) -> Self {
        self.shewhart = shewhart;
        self
    }

    #[must_use]
    pub fn with_ewma(mut self, ewma: EwmaConfig) -> Self {
        self.ewma = ewma;
        self
    }

    #[must_use]
    pub fn with_cusum(mut self, cusum: CusumConfig) -> Self {
        self.cusum = cusum;
        self
    }

    /// Validates every chart section.
    pub fn validate(self) -> SpcResult<Self> {
        self.shewhart.validate()?;
        self.ewma.validate()?;
        self.cusum.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> SpcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(input: &str) -> SpcResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }
}
