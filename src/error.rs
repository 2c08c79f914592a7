use thiserror::Error;

pub type SpcResult<T> = Result<T, SpcError>;

#[derive(Debug, Error)]
pub enum SpcError {
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    #[error("insufficient data: at least {required} points required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "invalid intraday window: opening={opening_second}s, closing={closing_second}s since midnight"
    )]
    InvalidWindow {
        opening_second: u32,
        closing_second: u32,
    },

    #[error("forecasting model has not been fitted")]
    ModelNotFitted,

    #[error("market data provider failed: {0}")]
    Provider(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
