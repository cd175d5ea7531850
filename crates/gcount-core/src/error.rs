//! Error types for gcount

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GcountError>;

/// Main error type for gcount
///
/// Counting itself never fails on valid text. Everything here comes from
/// the layers around it: decoding, table loading and pattern compilation.
#[derive(Debug, Error)]
pub enum GcountError {
    #[error("Invalid encoding: input is not valid UTF-8 after byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },

    #[error("Invalid mark table: {0}")]
    InvalidTable(String),

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Strategies disagree: scan={scan}, pattern={pattern}")]
    StrategyMismatch { scan: usize, pattern: usize },

    #[error("Mark table JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<std::str::Utf8Error> for GcountError {
    fn from(err: std::str::Utf8Error) -> Self {
        GcountError::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}
