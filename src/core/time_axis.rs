use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::bars::{BarField, IntradayBar};
use crate::core::primitives::{
    SECONDS_PER_DAY, midnight_epoch_seconds, naive_from_epoch_seconds, seconds_since_midnight,
};
use crate::core::types::{DatedPoint, DatedSeries};
use crate::error::{SpcError, SpcResult};

/// What to do when every bar shares the same time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroWidthWindowPolicy {
    /// Map every bar onto midnight of its own calendar day.
    #[default]
    ZeroOffset,
    /// Fail with `SpcError::InvalidWindow`.
    Reject,
}

/// Tuning for intraday time-axis correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeAxisConfig {
    #[serde(default)]
    pub zero_width_policy: ZeroWidthWindowPolicy,
    /// Bar column carried into the corrected series.
    #[serde(default)]
    pub field: BarField,
}

impl TimeAxisConfig {
    #[must_use]
    pub fn with_zero_width_policy(mut self, policy: ZeroWidthWindowPolicy) -> Self {
        self.zero_width_policy = policy;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: BarField) -> Self {
        self.field = field;
        self
    }
}

/// Observed trading window in seconds since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingWindow {
    pub opening_second: u32,
    pub closing_second: u32,
}

impl TradingWindow {
    /// Earliest and latest time of day across all bars, or `None` when empty.
    #[must_use]
    pub fn observe(bars: &[IntradayBar]) -> Option<Self> {
        let mut seconds = bars.iter().map(|bar| seconds_since_midnight(bar.time));
        let first = seconds.next()?;
        let (opening_second, closing_second) =
            seconds.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
        Some(Self {
            opening_second,
            closing_second,
        })
    }

    #[must_use]
    /// Seconds between opening and closing; `0` for a reversed window.
    pub fn width(self) -> u32 {
        self.closing_second.saturating_sub(self.opening_second)
    }

    #[must_use]
    pub fn is_zero_width(self) -> bool {
        self.width() == 0
    }

    /// Rescales a time of day into an offset on the 24h synthetic day.
    ///
    /// The result is `floor(fraction * 86400)` clamped to `[0, 86399]` so the
    /// closing bar stays on its own day. A zero-width window yields `0`.
    #[must_use]
    pub fn synthetic_offset(self, second_full: u32) -> u32 {
        let width = self.width();
        if width == 0 {
            return 0;
        }
        let clamped = second_full.clamp(self.opening_second, self.closing_second);
        let elapsed = u64::from(clamped - self.opening_second);
        let scaled = elapsed * u64::from(SECONDS_PER_DAY) / u64::from(width);
        (scaled as u32).min(SECONDS_PER_DAY - 1)
    }
}

/// One bar after time-axis correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectedPoint {
    pub original_time: NaiveDateTime,
    pub corrected_time: NaiveDateTime,
    pub value: f64,
}

/// Bars remapped onto the synthetic calendar-uniform axis.
///
/// Same length and order as the input bars. Corrected timestamps are
/// non-decreasing; use `into_dated_series` to obtain a strict series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrectedDatedSeries {
    points: Vec<CorrectedPoint>,
    window: Option<TradingWindow>,
}

impl CorrectedDatedSeries {
    #[must_use]
    pub fn points(&self) -> &[CorrectedPoint] {
        &self.points
    }

    /// Observed trading window, `None` when the input was empty.
    #[must_use]
    pub fn window(&self) -> Option<TradingWindow> {
        self.window
    }

    #[must_use]
    pub fn corrected_times(&self) -> Vec<NaiveDateTime> {
        self.points.iter().map(|p| p.corrected_time).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Validates the corrected axis into a strictly increasing `DatedSeries`.
    pub fn into_dated_series(self) -> SpcResult<DatedSeries> {
        DatedSeries::new(
            self.points
                .into_iter()
                .map(|p| DatedPoint::new(p.corrected_time, p.value))
                .collect(),
        )
    }
}

/// Maps ragged intraday timestamps onto a uniform synthetic calendar axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeAxisNormalizer {
    config: TimeAxisConfig,
}

impl TimeAxisNormalizer {
    #[must_use]
    pub fn new(config: TimeAxisConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> TimeAxisConfig {
        self.config
    }

    /// Corrects bar timestamps; input order is kept, nothing is sorted.
    ///
    /// Empty input yields an empty result.
    pub fn normalize(&self, bars: &[IntradayBar]) -> SpcResult<CorrectedDatedSeries> {
        let Some(window) = TradingWindow::observe(bars) else {
            debug!("skipping time-axis normalization for empty bar set");
            return Ok(CorrectedDatedSeries::default());
        };

        if window.is_zero_width() {
            match self.config.zero_width_policy {
                ZeroWidthWindowPolicy::Reject => {
                    return Err(SpcError::InvalidWindow {
                        opening_second: window.opening_second,
                        closing_second: window.closing_second,
                    });
                }
                ZeroWidthWindowPolicy::ZeroOffset => {
                    warn!(
                        second = window.opening_second,
                        bars = bars.len(),
                        "zero-width trading window, mapping every bar to midnight"
                    );
                }
            }
        }

        debug!(
            bars = bars.len(),
            opening_second = window.opening_second,
            closing_second = window.closing_second,
            "normalizing intraday time axis"
        );

        let mut points = Vec::with_capacity(bars.len());
        for bar in bars {
            let second_full = seconds_since_midnight(bar.time);
            let days_in_sec = midnight_epoch_seconds(bar.date());
            let corrected_second_full =
                days_in_sec + i64::from(window.synthetic_offset(second_full));
            let corrected_time = naive_from_epoch_seconds(corrected_second_full)?;
            trace!(original = %bar.time, corrected = %corrected_time, "corrected bar time");
            points.push(CorrectedPoint {
                original_time: bar.time,
                corrected_time,
                value: bar.value(self.config.field),
            });
        }

        Ok(CorrectedDatedSeries {
            points,
            window: Some(window),
        })
    }
}

/// Convenience wrapper using the default configuration.
pub fn normalize(bars: &[IntradayBar]) -> SpcResult<CorrectedDatedSeries> {
    TimeAxisNormalizer::default().normalize(bars)
}

/// Default configuration carrying `field` instead of the open price.
pub fn normalize_field(bars: &[IntradayBar], field: BarField) -> SpcResult<CorrectedDatedSeries> {
    TimeAxisNormalizer::new(TimeAxisConfig::default().with_field(field)).normalize(bars)
}
