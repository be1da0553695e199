//! Appliance Sim error types

use thiserror::Error;

/// Appliance Sim error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Request body is not valid JSON for the target shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request body could not be read
    #[error("Body error: {0}")]
    Body(String),

    /// A handler is already registered for the path
    #[error("Endpoint already registered: {0}")]
    DuplicateEndpoint(String),

    /// Registration path is not absolute
    #[error("Invalid endpoint path: {0}")]
    InvalidPath(String),

    /// Simulator lifecycle error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Appliance Sim operations
pub type Result<T> = std::result::Result<T, Error>;
