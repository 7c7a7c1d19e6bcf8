use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum VsixError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("Invalid extension identifier '{0}': expected 'publisher.extension'")]
    InvalidIdentifier(String),

    #[error("API Error: {0}")]
    Api(String),

    #[error("Metadata Error: {0}")]
    Metadata(String),

    #[error("DownloadError: Failed to download '{0}' from '{1}': {2}")]
    DownloadError(String, String, String),

    #[error("Installation Error: {0}")]
    Install(String),

    #[error("Failed to execute command: {0}")]
    CommandExec(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("IoError: {0}")]
    IoError(String),
}

impl From<std::io::Error> for VsixError {
    fn from(err: std::io::Error) -> Self {
        VsixError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for VsixError {
    fn from(err: reqwest::Error) -> Self {
        VsixError::Http(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, VsixError>;
