use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Requested y-axis tick style.
///
/// Deserialization is lenient: historic aliases are accepted and any
/// unrecognized name falls back to `Numeric`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum YAxisFormat {
    Percentage,
    Currency,
    Integer,
    #[default]
    Numeric,
}

impl YAxisFormat {
    /// Resolves a format name; unknown names resolve to `Numeric`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "percentage" | "pct" | "freq" => Self::Percentage,
            "currency" | "pound" | "£" | "severity" => Self::Currency,
            "integer" => Self::Integer,
            _ => Self::Numeric,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Currency => "currency",
            Self::Integer => "integer",
            Self::Numeric => "numeric",
        }
    }
}

impl From<String> for YAxisFormat {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<YAxisFormat> for &'static str {
    fn from(format: YAxisFormat) -> Self {
        format.name()
    }
}

/// Renderer-agnostic y tick formatting (d3-format syntax).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickFormatDescriptor {
    pub tick_format: String,
    #[serde(default)]
    pub tick_prefix: Option<String>,
}

impl TickFormatDescriptor {
    #[must_use]
    pub fn is_percent(&self) -> bool {
        self.tick_format.ends_with('%')
    }
}

pub const PERCENT_TICK_FORMAT: &str = "~%";
pub const SI_TICK_FORMAT: &str = "~s";
pub const CURRENCY_TICK_PREFIX: &str = "£ ";

/// Pure lookup from requested format to tick descriptor.
#[must_use]
pub fn format_for(y_format: YAxisFormat) -> TickFormatDescriptor {
    match y_format {
        YAxisFormat::Percentage => TickFormatDescriptor {
            tick_format: PERCENT_TICK_FORMAT.to_owned(),
            tick_prefix: None,
        },
        YAxisFormat::Currency => TickFormatDescriptor {
            tick_format: SI_TICK_FORMAT.to_owned(),
            tick_prefix: Some(CURRENCY_TICK_PREFIX.to_owned()),
        },
        YAxisFormat::Integer | YAxisFormat::Numeric => TickFormatDescriptor {
            tick_format: SI_TICK_FORMAT.to_owned(),
            tick_prefix: None,
        },
    }
}

/// Name-based lookup; unknown names get the `numeric` descriptor.
#[must_use]
pub fn format_for_name(name: &str) -> TickFormatDescriptor {
    format_for(YAxisFormat::from_name(name))
}

/// Requested x-axis tick cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum AxisFrequency {
    #[default]
    Default,
    Monthly,
    Weekly,
    Quarterly,
}

impl AxisFrequency {
    /// Case-insensitive; anything unrecognized resolves to `Monthly`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Self::Default,
            "weekly" => Self::Weekly,
            "quarterly" => Self::Quarterly,
            _ => Self::Monthly,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Quarterly => "quarterly",
        }
    }
}

impl From<String> for AxisFrequency {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<AxisFrequency> for &'static str {
    fn from(frequency: AxisFrequency) -> Self {
        frequency.name()
    }
}

/// Distance between two consecutive x ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "count", rename_all = "snake_case")]
pub enum TickInterval {
    Months(u32),
    Days(u32),
}

impl TickInterval {
    /// Fixed-length intervals in milliseconds; `None` for calendar months.
    #[must_use]
    pub fn as_millis(self) -> Option<u64> {
        match self {
            Self::Months(_) => None,
            Self::Days(days) => Some(u64::from(days) * 24 * 60 * 60 * 1_000),
        }
    }
}

/// Renderer-agnostic x tick placement and label format (strftime syntax).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSpec {
    pub tick_format: String,
    pub interval: TickInterval,
    /// Reference tick that fixed-length intervals are anchored to.
    #[serde(default)]
    pub anchor: Option<NaiveDate>,
}

pub const MONTH_TICK_FORMAT: &str = "%Y-%m";
pub const DAY_TICK_FORMAT: &str = "%Y-%m-%d";

/// Monday used as the weekly tick anchor.
#[must_use]
pub fn weekly_tick_anchor() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2021, 1, 4)
}

#[must_use]
pub fn axis_tick_spec(frequency: AxisFrequency) -> TickSpec {
    match frequency {
        AxisFrequency::Default | AxisFrequency::Monthly => TickSpec {
            tick_format: MONTH_TICK_FORMAT.to_owned(),
            interval: TickInterval::Months(1),
            anchor: None,
        },
        AxisFrequency::Weekly => TickSpec {
            tick_format: DAY_TICK_FORMAT.to_owned(),
            interval: TickInterval::Days(7),
            anchor: weekly_tick_anchor(),
        },
        AxisFrequency::Quarterly => TickSpec {
            tick_format: MONTH_TICK_FORMAT.to_owned(),
            interval: TickInterval::Months(3),
            anchor: None,
        },
    }
}
