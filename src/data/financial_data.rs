use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::core::{
    BarField, CorrectedDatedSeries, DailyBar, DatedPoint, DatedSeries, IntradayBar,
    TimeAxisConfig, TimeAxisNormalizer,
};
use crate::error::SpcResult;

use super::csv_export::write_live_data_csv;
use super::provider::{MarketDataProvider, SecurityInfo};

/// Cached market data for one security.
///
/// Everything is fetched at construction; each `update_*` call re-polls one
/// part through the provider and replaces the cached copy.
#[derive(Debug, Clone)]
pub struct FinancialData<P> {
    symbol: String,
    provider: P,
    info: SecurityInfo,
    history: Vec<DailyBar>,
    live: Vec<IntradayBar>,
}

impl<P: MarketDataProvider> FinancialData<P> {
    pub fn new(symbol: impl Into<String>, provider: P) -> SpcResult<Self> {
        let symbol = symbol.into();
        let info = provider.fetch_info(&symbol)?;
        let history = provider.fetch_history(&symbol)?;
        let live = provider.fetch_intraday(&symbol)?;
        debug!(
            %symbol,
            info_keys = info.len(),
            history = history.len(),
            live = live.len(),
            "loaded financial data"
        );
        Ok(Self {
            symbol,
            provider,
            info,
            history,
            live,
        })
    }

    pub fn update_info(&mut self) -> SpcResult<()> {
        self.info = self.provider.fetch_info(&self.symbol)?;
        debug!(symbol = %self.symbol, keys = self.info.len(), "refreshed info");
        Ok(())
    }

    pub fn update_history(&mut self) -> SpcResult<()> {
        self.history = self.provider.fetch_history(&self.symbol)?;
        debug!(symbol = %self.symbol, bars = self.history.len(), "refreshed history");
        Ok(())
    }

    pub fn update_live_values(&mut self) -> SpcResult<()> {
        self.live = self.provider.fetch_intraday(&self.symbol)?;
        debug!(symbol = %self.symbol, bars = self.live.len(), "refreshed live values");
        Ok(())
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn info(&self) -> &SecurityInfo {
        &self.info
    }

    #[must_use]
    pub fn history(&self) -> &[DailyBar] {
        &self.history
    }

    #[must_use]
    pub fn live(&self) -> &[IntradayBar] {
        &self.live
    }

    #[must_use]
    pub fn latest_live_time(&self) -> Option<NaiveDateTime> {
        self.live.iter().map(|bar| bar.time).max()
    }

    /// One column of the daily history as a validated series.
    pub fn history_series(&self, field: BarField) -> SpcResult<DatedSeries> {
        DatedSeries::new(
            self.history
                .iter()
                .map(|bar| DatedPoint::on_date(bar.date, bar.value(field)))
                .collect(),
        )
    }

    /// One column of the live bars on their real timestamps.
    pub fn live_series(&self, field: BarField) -> SpcResult<DatedSeries> {
        DatedSeries::new(
            self.live
                .iter()
                .map(|bar| DatedPoint::new(bar.time, bar.value(field)))
                .collect(),
        )
    }

    /// Live bars remapped onto the synthetic calendar axis.
    pub fn corrected_live(&self, config: TimeAxisConfig) -> SpcResult<CorrectedDatedSeries> {
        TimeAxisNormalizer::new(config).normalize(&self.live)
    }

    /// Writes the live bars with their corrected time column as CSV.
    pub fn save_live_data(&self, path: impl AsRef<Path>) -> SpcResult<()> {
        let corrected = self.corrected_live(TimeAxisConfig::default())?;
        write_live_data_csv(path, &self.live, Some(&corrected))
    }
}
