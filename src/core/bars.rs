use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{SpcError, SpcResult};

/// Price/volume column selected out of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarField {
    #[default]
    Open,
    High,
    Low,
    Close,
    Volume,
}

/// One intraday (minute) bar stamped with exchange-local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntradayBar {
    pub time: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl IntradayBar {
    /// Builds a validated bar from raw floating values.
    ///
    /// Invariants:
    /// - all prices are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(
        time: NaiveDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> SpcResult<Self> {
        validate_ohlc(open, high, low, close)?;
        Ok(Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Converts decimal quotes (as delivered by most market data feeds).
    pub fn from_decimal(
        time: NaiveDateTime,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> SpcResult<Self> {
        Self::new(
            time,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            volume,
        )
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    #[must_use]
    pub fn value(&self, field: BarField) -> f64 {
        match field {
            BarField::Open => self.open,
            BarField::High => self.high,
            BarField::Low => self.low,
            BarField::Close => self.close,
            BarField::Volume => self.volume as f64,
        }
    }
}

/// One row of the full daily history of a security.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    #[serde(default)]
    pub dividends: f64,
    #[serde(default)]
    pub stock_splits: f64,
}

impl DailyBar {
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> SpcResult<Self> {
        validate_ohlc(open, high, low, close)?;
        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            dividends: 0.0,
            stock_splits: 0.0,
        })
    }

    /// Attaches corporate-action columns.
    pub fn with_corporate_actions(mut self, dividends: f64, stock_splits: f64) -> SpcResult<Self> {
        if !dividends.is_finite() || !stock_splits.is_finite() {
            return Err(SpcError::InvalidSeries(
                "dividends and stock splits must be finite".to_owned(),
            ));
        }
        self.dividends = dividends;
        self.stock_splits = stock_splits;
        Ok(self)
    }

    #[must_use]
    pub fn value(&self, field: BarField) -> f64 {
        match field {
            BarField::Open => self.open,
            BarField::High => self.high,
            BarField::Low => self.low,
            BarField::Close => self.close,
            BarField::Volume => self.volume as f64,
        }
    }
}

fn validate_ohlc(open: f64, high: f64, low: f64, close: f64) -> SpcResult<()> {
    if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
        return Err(SpcError::InvalidSeries(
            "ohlc values must be finite".to_owned(),
        ));
    }

    if low > high {
        return Err(SpcError::InvalidSeries(
            "ohlc low must be <= high".to_owned(),
        ));
    }

    if open < low || open > high || close < low || close > high {
        return Err(SpcError::InvalidSeries(
            "ohlc open/close must be within low/high range".to_owned(),
        ));
    }

    Ok(())
}
