use std::io;
use thiserror::Error;

/// Core error types for the guard system
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid IP address: {0}")]
    InvalidIp(String),

    #[error("Invalid CIDR block: {0}")]
    InvalidCidr(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GuardError>;
