use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The request, or the read of its body, never completed.
    #[error("Configuration request failed: {0}")]
    RequestFailed(String),
    #[error("Configuration request returned status {code}")]
    NonSuccessStatus { code: u16 },
}

impl ConfigError {
    pub fn request_failed(reason: impl Into<String>) -> Self {
        Self::RequestFailed(reason.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
