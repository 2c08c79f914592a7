//! Market data collaborator interface and the per-security cache built on it.

mod csv_export;
mod financial_data;
mod provider;

pub use csv_export::{read_live_data_csv, write_live_data_csv};
pub use financial_data::FinancialData;
pub use provider::{MarketDataProvider, SecurityInfo};
