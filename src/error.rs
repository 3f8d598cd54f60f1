//! # Error Types
//!
//! Custom error types for Input Signals using `thiserror`.

use thiserror::Error;

/// Main error type for Input Signals
#[derive(Debug, Error)]
pub enum InputError {
    /// A signal name did not match `^[a-z]+(_[a-z]+)*$`
    #[error("Signal name not compliant: {0}")]
    InvalidSignalName(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for Input Signals
pub type Result<T> = std::result::Result<T, InputError>;
