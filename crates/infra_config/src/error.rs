//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating [`crate::ClientSettings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}. Must be an absolute http(s) origin")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}. Must be a positive number of seconds")]
    InvalidTimeout(String),

    #[error("Invalid history base: {0}. Must start with '/'")]
    InvalidHistoryBase(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid environment: {0}. Must be one of: development, staging, production")]
    InvalidEnvironment(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}
