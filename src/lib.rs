//! spc-chart-rs: intraday time-axis normalization and statistical process
//! control charts for market data.
//!
//! Data flows one way: intraday bars are remapped onto a synthetic calendar
//! axis (`core::TimeAxisNormalizer`), a validated `core::DatedSeries` feeds one
//! of the pure chart functions in `control`, and `presentation` turns the
//! resulting overlays into a renderer-agnostic bundle.

pub mod config;
pub mod control;
pub mod core;
pub mod data;
pub mod error;
pub mod forecast;
pub mod presentation;
pub mod telemetry;

pub use config::SpcConfig;
pub use control::{ControlChartResult, cusum, ewma, shewhart};
pub use crate::core::{DatedSeries, IntradayBar, TimeAxisNormalizer};
pub use error::{SpcError, SpcResult};
pub use presentation::{ChartPresentationSpec, SeriesPresenter};
