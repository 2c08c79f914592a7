use crate::error::SpcResult;

use super::chart::PresentedChart;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `PresentedChart`, so drawing code
/// stays isolated from the statistics and time-axis logic.
pub trait ChartRenderer {
    fn render(&mut self, chart: &PresentedChart) -> SpcResult<()>;
}

/// No-op renderer used by tests and headless report jobs.
///
/// It still validates chart content so callers catch malformed curves before
/// a real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_curve_count: usize,
    pub last_point_count: usize,
}

impl ChartRenderer for NullRenderer {
    fn render(&mut self, chart: &PresentedChart) -> SpcResult<()> {
        chart.validate()?;
        self.last_curve_count = chart.curves.len();
        self.last_point_count = chart.curves.values().map(|c| c.values.len()).sum();
        Ok(())
    }
}
