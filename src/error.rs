//! Error types for the media fetcher

use thiserror::Error;

use crate::account::ParseAccountError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid account reference: {0}")]
    InvalidAccount(#[from] ParseAccountError),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Downloader tool is not available: {0}")]
    ToolMissing(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Another fetcher run is already in progress")]
    AlreadyRunning,

    #[error("Failed to acquire run lock: {0}")]
    LockError(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("No valid input after {0} attempts")]
    AttemptsExhausted(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
