use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("symbol must not be empty")]
    EmptySymbol,
    #[error("script loader error: {0}")]
    Script(String),
    #[error("chart widget error: {0}")]
    Widget(String),
    #[error("invalid chart settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("dom unavailable: {0}")]
    Dom(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
