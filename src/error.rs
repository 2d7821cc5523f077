use thiserror::Error;

#[derive(Error, Debug)]
pub enum QeaError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Dimension Mismatch: {what} has {found} entries, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Configuration Error: elitist count {elitist_count} exceeds sample size {sample_size}")]
    EliteExceedsSample {
        elitist_count: usize,
        sample_size: usize,
    },

    #[error("Invalid Parameter: {0}")]
    InvalidParameter(String),
}

pub type QeaResult<T> = Result<T, QeaError>;
