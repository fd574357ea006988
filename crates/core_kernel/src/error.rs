//! Kernel errors
//!
//! Raised where raw text enters the system: identifiers read from request
//! paths and configuration values read from the environment.

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Text that does not name an identifier of the given kind
    #[error("Invalid identifier for {kind}: {value}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
