//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read this file: {0}")]
    Extraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    EmptyInput(EmptyInput),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

/// Which side of the comparison was empty after cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyInput {
    Resume,
    JobDescription,
}

impl std::fmt::Display for EmptyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyInput::Resume => write!(f, "Please provide a resume"),
            EmptyInput::JobDescription => write!(f, "Please provide a job description"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ScreenerError::AnalysisFailed(err.to_string())
    }
}
