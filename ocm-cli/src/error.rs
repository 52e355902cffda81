//! Error types for the OCM CLI

use ocm_client::{OcmError, PollError};
use thiserror::Error;

/// Main error type for the OCM CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The server answered with an error status
    #[error("API error: {0}")]
    Api(ocm_client::ApiError),

    /// Transport-level errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// The wait command gave up before the wanted state was reached
    #[error("Timed out waiting: {0}")]
    WaitTimeout(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{message}")]
    Generic { message: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid config format
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] serde_yaml::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid numeric setting
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// Directory creation failed
    #[error("Failed to create config directory: {0}")]
    DirectoryCreation(std::io::Error),
}

impl From<OcmError> for CliError {
    fn from(err: OcmError) -> Self {
        match err {
            OcmError::Api(api) => CliError::Api(api),
            OcmError::Poll(PollError::DeadlineExceeded) => {
                CliError::WaitTimeout("deadline exceeded".to_string())
            }
            OcmError::Poll(PollError::Cancelled) => {
                CliError::WaitTimeout("cancelled".to_string())
            }
            OcmError::Http(http) => CliError::Transport(http.to_string()),
            OcmError::Configuration(message) => CliError::Validation(message),
            other => CliError::Generic {
                message: other.to_string(),
            },
        }
    }
}

impl CliError {
    /// Short machine-readable name used in JSON error output
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Config(_) => "config",
            CliError::Api(_) => "api",
            CliError::Transport(_) => "transport",
            CliError::Validation(_) => "validation",
            CliError::WaitTimeout(_) => "wait_timeout",
            CliError::Io(_) => "io",
            CliError::Generic { .. } => "generic",
        }
    }
}
