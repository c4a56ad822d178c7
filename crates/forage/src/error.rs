use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model artifact not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("Model artifact mismatch: {0}")]
    ArtifactMismatch(String),

    #[error("Unknown category code '{code}' for domain {domain}")]
    UnknownCategory { domain: String, code: char },

    #[error("Unknown label '{label}' for domain {domain}")]
    UnknownLabel { domain: String, label: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User input error: {0}")]
    UserInput(String),
}

impl From<dialoguer::Error> for ForageError {
    fn from(err: dialoguer::Error) -> Self {
        ForageError::UserInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ForageError>;
