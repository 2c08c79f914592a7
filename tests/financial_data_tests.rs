use std::cell::RefCell;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use spc_chart::core::{BarField, DailyBar, IntradayBar, TimeAxisConfig};
use spc_chart::data::{
    FinancialData, MarketDataProvider, SecurityInfo, read_live_data_csv, write_live_data_csv,
};
use spc_chart::error::{SpcError, SpcResult};

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

fn minute_bar(time: NaiveDateTime, open: f64) -> IntradayBar {
    IntradayBar::new(time, open, open + 0.5, open - 0.5, open + 0.25, 1_000).expect("valid bar")
}

#[derive(Default)]
struct ScriptedProvider {
    live: RefCell<Vec<IntradayBar>>,
    calls: RefCell<Vec<String>>,
}

impl MarketDataProvider for ScriptedProvider {
    fn fetch_info(&self, symbol: &str) -> SpcResult<SecurityInfo> {
        self.calls.borrow_mut().push(format!("info:{symbol}"));
        let mut info = SecurityInfo::new();
        info.insert("symbol".to_owned(), serde_json::json!(symbol));
        info.insert("currency".to_owned(), serde_json::json!("GBP"));
        Ok(info)
    }

    fn fetch_history(&self, symbol: &str) -> SpcResult<Vec<DailyBar>> {
        self.calls.borrow_mut().push(format!("history:{symbol}"));
        (1..=3)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(2023, 12, day).expect("valid date");
                let close = 100.0 + f64::from(day);
                DailyBar::new(date, close - 1.0, close + 1.0, close - 2.0, close, 10)
            })
            .collect()
    }

    fn fetch_intraday(&self, symbol: &str) -> SpcResult<Vec<IntradayBar>> {
        self.calls.borrow_mut().push(format!("intraday:{symbol}"));
        Ok(self.live.borrow().clone())
    }
}

#[derive(Debug)]
struct OfflineProvider;

impl MarketDataProvider for OfflineProvider {
    fn fetch_info(&self, _symbol: &str) -> SpcResult<SecurityInfo> {
        Err(SpcError::Provider("network unreachable".to_owned()))
    }

    fn fetch_history(&self, _symbol: &str) -> SpcResult<Vec<DailyBar>> {
        Ok(Vec::new())
    }

    fn fetch_intraday(&self, _symbol: &str) -> SpcResult<Vec<IntradayBar>> {
        Ok(Vec::new())
    }
}

#[test]
fn construction_fetches_every_part_once() {
    let provider = ScriptedProvider::default();
    provider
        .live
        .borrow_mut()
        .extend([minute_bar(at(2, 9, 30), 50.0), minute_bar(at(2, 16, 0), 51.0)]);

    let data = FinancialData::new("VOD.L", &provider).expect("load");
    assert_eq!(data.symbol(), "VOD.L");
    assert_eq!(data.info().get("currency"), Some(&serde_json::json!("GBP")));
    assert_eq!(data.history().len(), 3);
    assert_eq!(data.live().len(), 2);
    assert_eq!(data.latest_live_time(), Some(at(2, 16, 0)));
    assert_eq!(
        *provider.calls.borrow(),
        vec!["info:VOD.L", "history:VOD.L", "intraday:VOD.L"]
    );
}

#[test]
fn update_live_values_replaces_the_cached_bars() {
    let provider = ScriptedProvider::default();
    provider.live.borrow_mut().push(minute_bar(at(2, 9, 30), 50.0));
    let mut data = FinancialData::new("VOD.L", &provider).expect("load");

    provider.live.borrow_mut().push(minute_bar(at(2, 9, 31), 50.5));
    data.update_live_values().expect("refresh");
    assert_eq!(data.live().len(), 2);
    assert_eq!(data.latest_live_time(), Some(at(2, 9, 31)));

    data.update_info().expect("refresh info");
    data.update_history().expect("refresh history");
    assert_eq!(provider.calls.borrow().len(), 6);
}

#[test]
fn provider_failure_surfaces_from_construction() {
    let err = FinancialData::new("VOD.L", OfflineProvider).expect_err("offline");
    assert!(matches!(err, SpcError::Provider(ref msg) if msg.contains("unreachable")));
}

#[test]
fn history_and_live_columns_become_dated_series() {
    let provider = ScriptedProvider::default();
    provider
        .live
        .borrow_mut()
        .extend([minute_bar(at(2, 9, 30), 50.0), minute_bar(at(2, 12, 45), 52.0)]);
    let data = FinancialData::new("VOD.L", &provider).expect("load");

    let closes = data.history_series(BarField::Close).expect("history");
    assert_eq!(closes.values(), vec![101.0, 102.0, 103.0]);

    let opens = data.live_series(BarField::Open).expect("live");
    assert_eq!(opens.times(), vec![at(2, 9, 30), at(2, 12, 45)]);

    let corrected = data
        .corrected_live(TimeAxisConfig::default())
        .expect("corrected");
    assert_eq!(corrected.corrected_times(), vec![at(2, 0, 0), at(2, 23, 59) + chrono::Duration::seconds(59)]);
}

#[test]
fn live_data_is_saved_with_its_corrected_time_column() {
    let provider = ScriptedProvider::default();
    provider.live.borrow_mut().extend([
        minute_bar(at(2, 9, 30), 50.0),
        minute_bar(at(2, 12, 45), 51.5),
        minute_bar(at(3, 16, 0), 49.75),
    ]);
    let data = FinancialData::new("VOD.L", &provider).expect("load");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("live.csv");
    data.save_live_data(&path).expect("save");

    let text = std::fs::read_to_string(&path).expect("read back");
    let header = text.lines().next().expect("header row");
    assert_eq!(header, "Datetime,Open,High,Low,Close,Volume,corrected_time");
    assert!(text.contains("2024-01-02T12:00:00"));

    let bars = read_live_data_csv(&path).expect("parse");
    assert_eq!(bars, data.live());
}

#[test]
fn csv_export_rejects_mismatched_corrected_series() {
    let bars = vec![minute_bar(at(2, 9, 30), 50.0), minute_bar(at(2, 9, 31), 50.0)];
    let corrected = spc_chart::core::normalize(&bars[..1]).expect("normalize");
    let dir = tempfile::tempdir().expect("temp dir");
    let err = write_live_data_csv(dir.path().join("bad.csv"), &bars, Some(&corrected))
        .expect_err("length mismatch");
    assert!(matches!(err, SpcError::InvalidSeries(_)));
}

#[test]
fn decimal_quotes_convert_into_bars() {
    let bar = IntradayBar::from_decimal(
        at(2, 10, 0),
        Decimal::new(10_050, 2),
        Decimal::new(10_100, 2),
        Decimal::new(10_000, 2),
        Decimal::new(10_075, 2),
        42,
    )
    .expect("decimal bar");
    assert_eq!(bar.open, 100.5);
    assert_eq!(bar.close, 100.75);
    assert_eq!(bar.value(BarField::Volume), 42.0);
}
