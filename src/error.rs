use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnvilError {
    #[error("Error encoding request: {0}")]
    EncodeError(#[source] serde_json::Error),
    #[error("Error making request: {0}")]
    TransportError(#[from] reqwest::Error),
    #[error("Error decoding response: {0}")]
    DecodeError(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AnvilError {
    pub fn decode(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::DecodeError(err.into())
    }
}

pub type Result<T> = std::result::Result<T, AnvilError>;
