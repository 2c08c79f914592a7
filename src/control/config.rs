use serde::{Deserialize, Serialize};

use crate::error::{SpcError, SpcResult};

/// Shewhart chart parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShewhartConfig {
    #[serde(default = "default_warning_sigma")]
    pub warning_sigma: f64,
    #[serde(default = "default_action_sigma")]
    pub action_sigma: f64,
    /// Drop Tukey-fence outliers before computing statistics.
    #[serde(default)]
    pub filter_outliers: bool,
}

impl Default for ShewhartConfig {
    fn default() -> Self {
        Self {
            warning_sigma: default_warning_sigma(),
            action_sigma: default_action_sigma(),
            filter_outliers: false,
        }
    }
}

impl ShewhartConfig {
    #[must_use]
    pub fn with_sigmas(mut self, warning_sigma: f64, action_sigma: f64) -> Self {
        self.warning_sigma = warning_sigma;
        self.action_sigma = action_sigma;
        self
    }

    #[must_use]
    pub fn with_filter_outliers(mut self, filter_outliers: bool) -> Self {
        self.filter_outliers = filter_outliers;
        self
    }

    pub fn validate(self) -> SpcResult<Self> {
        require_positive("warning_sigma", self.warning_sigma)?;
        require_positive("action_sigma", self.action_sigma)?;
        Ok(self)
    }
}

/// EWMA chart parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EwmaConfig {
    #[serde(default = "default_control_multiple")]
    pub control_multiple: f64,
    /// Weight of the newest observation, in `(0, 1]`.
    #[serde(default = "default_smoothing_factor")]
    pub smoothing_factor: f64,
}

impl Default for EwmaConfig {
    fn default() -> Self {
        Self {
            control_multiple: default_control_multiple(),
            smoothing_factor: default_smoothing_factor(),
        }
    }
}

impl EwmaConfig {
    #[must_use]
    pub fn with_control_multiple(mut self, control_multiple: f64) -> Self {
        self.control_multiple = control_multiple;
        self
    }

    #[must_use]
    pub fn with_smoothing_factor(mut self, smoothing_factor: f64) -> Self {
        self.smoothing_factor = smoothing_factor;
        self
    }

    pub fn validate(self) -> SpcResult<Self> {
        require_positive("control_multiple", self.control_multiple)?;
        let alpha = self.smoothing_factor;
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(SpcError::InvalidParameter(format!(
                "smoothing_factor must be in (0, 1], got {alpha}"
            )));
        }
        Ok(self)
    }
}

/// CUSUM parameters.
///
/// `beta` and `delta` are reserved for a two-sided sequential test; only the
/// running statistic is computed today, but the values are still validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CusumConfig {
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_delta")]
    pub delta: f64,
}

impl Default for CusumConfig {
    fn default() -> Self {
        Self {
            beta: default_beta(),
            delta: default_delta(),
        }
    }
}

impl CusumConfig {
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub fn validate(self) -> SpcResult<Self> {
        if !self.beta.is_finite() || self.beta <= 0.0 || self.beta >= 1.0 {
            return Err(SpcError::InvalidParameter(format!(
                "beta must be in (0, 1), got {}",
                self.beta
            )));
        }
        require_positive("delta", self.delta)?;
        Ok(self)
    }
}

fn require_positive(name: &str, value: f64) -> SpcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpcError::InvalidParameter(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn default_warning_sigma() -> f64 {
    2.0
}

fn default_action_sigma() -> f64 {
    3.0
}

fn default_control_multiple() -> f64 {
    5.0
}

fn default_smoothing_factor() -> f64 {
    0.3
}

fn default_beta() -> f64 {
    0.01
}

fn default_delta() -> f64 {
    1.0
}
