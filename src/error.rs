//! Error handling for the talent-fit application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentFitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TalentFitError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for TalentFitError {
    fn from(err: anyhow::Error) -> Self {
        TalentFitError::Extraction(err.to_string())
    }
}
