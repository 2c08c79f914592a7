use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{CorrectedDatedSeries, IntradayBar};
use crate::error::{SpcError, SpcResult};

/// One CSV row of live data; `corrected_time` is empty when unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LiveDataRow {
    #[serde(rename = "Datetime")]
    time: NaiveDateTime,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: u64,
    corrected_time: Option<NaiveDateTime>,
}

/// Writes bars (and their corrected times, when given) as CSV.
pub fn write_live_data_csv(
    path: impl AsRef<Path>,
    bars: &[IntradayBar],
    corrected: Option<&CorrectedDatedSeries>,
) -> SpcResult<()> {
    if let Some(corrected) = corrected {
        if corrected.len() != bars.len() {
            return Err(SpcError::InvalidSeries(format!(
                "corrected series length {} does not match {} bars",
                corrected.len(),
                bars.len()
            )));
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for (index, bar) in bars.iter().enumerate() {
        let corrected_time = corrected.map(|series| series.points()[index].corrected_time);
        writer.serialize(LiveDataRow {
            time: bar.time,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            corrected_time,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads bars previously written by `write_live_data_csv`.
///
/// The `corrected_time` column is ignored; it is recomputed on demand.
pub fn read_live_data_csv(path: impl AsRef<Path>) -> SpcResult<Vec<IntradayBar>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let mut bars = Vec::new();
    for row in reader.deserialize::<LiveDataRow>() {
        let row = row?;
        bars.push(IntradayBar::new(
            row.time, row.open, row.high, row.low, row.close, row.volume,
        )?);
    }
    Ok(bars)
}
