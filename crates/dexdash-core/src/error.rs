use thiserror::Error;

#[derive(Debug, Error)]
pub enum DexDashError {
    #[error("No tokens found. Try pasting a contract address.")]
    NoResults,
    #[error("Enter a token name, symbol or address")]
    EmptyQuery,
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Export failed: {0}")]
    Export(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DexDashError {
    fn from(err: serde_json::Error) -> Self {
        DexDashError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DexDashError>;
