//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Broadcast capacity must be greater than zero")]
    InvalidBroadcastCapacity,

    #[error("Interval must be greater than zero: {0}")]
    InvalidInterval(&'static str),

    #[error("JPEG quality must be between 1 and 100, got {0}")]
    InvalidJpegQuality(u8),

    #[error("Initial height must be a non-negative number")]
    InvalidInitialHeight,

    #[error("Height step must be a positive number")]
    InvalidHeightStep,
}
