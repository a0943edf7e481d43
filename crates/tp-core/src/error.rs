use thiserror::Error;

/// Raised when an encoded document has no marker-delimited header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    #[error("Header not found: expected a dictionary delimited by '{marker}'")]
    HeaderNotFound { marker: char },
}

#[derive(Error, Debug)]
pub enum TpError {
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TpError>;
