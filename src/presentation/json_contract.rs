use serde::{Deserialize, Serialize};

use crate::error::{SpcError, SpcResult};

use super::chart::PresentedChart;

pub const PRESENTED_CHART_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentedChartJsonContractV1 {
    pub schema_version: u32,
    pub chart: PresentedChart,
}

impl PresentedChart {
    pub fn to_json_pretty(&self) -> SpcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_contract_v1_pretty(&self) -> SpcResult<String> {
        let payload = PresentedChartJsonContractV1 {
            schema_version: PRESENTED_CHART_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Accepts either a bare chart or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SpcResult<Self> {
        if let Ok(chart) = serde_json::from_str::<PresentedChart>(input) {
            return Ok(chart);
        }
        let payload: PresentedChartJsonContractV1 = serde_json::from_str(input)?;
        if payload.schema_version != PRESENTED_CHART_JSON_SCHEMA_V1 {
            return Err(SpcError::InvalidParameter(format!(
                "unsupported presented chart schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}
