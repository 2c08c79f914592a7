pub mod bars;
pub mod primitives;
pub mod stats;
pub mod time_axis;
pub mod types;

pub use bars::{BarField, DailyBar, IntradayBar};
pub use time_axis::{
    CorrectedDatedSeries, CorrectedPoint, TimeAxisConfig, TimeAxisNormalizer, TradingWindow,
    ZeroWidthWindowPolicy, normalize, normalize_field,
};
pub use types::{DatedPoint, DatedSeries};
