use indexmap::IndexMap;

use crate::core::{DailyBar, IntradayBar};
use crate::error::SpcResult;

/// Snapshot key/value information about a security.
pub type SecurityInfo = IndexMap<String, serde_json::Value>;

/// External market-data source, polled on demand.
///
/// Implementations own the network/file access; failures should be mapped
/// to `SpcError::Provider`. History and intraday bars are expected in
/// ascending time order.
pub trait MarketDataProvider {
    fn fetch_info(&self, symbol: &str) -> SpcResult<SecurityInfo>;

    fn fetch_history(&self, symbol: &str) -> SpcResult<Vec<DailyBar>>;

    fn fetch_intraday(&self, symbol: &str) -> SpcResult<Vec<IntradayBar>>;
}

impl<P: MarketDataProvider + ?Sized> MarketDataProvider for &P {
    fn fetch_info(&self, symbol: &str) -> SpcResult<SecurityInfo> {
        (**self).fetch_info(symbol)
    }

    fn fetch_history(&self, symbol: &str) -> SpcResult<Vec<DailyBar>> {
        (**self).fetch_history(symbol)
    }

    fn fetch_intraday(&self, symbol: &str) -> SpcResult<Vec<IntradayBar>> {
        (**self).fetch_intraday(symbol)
    }
}
