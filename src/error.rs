//! Error handling module for railfence
//!
//! Each concern has its own error enum (`KeyError`, `SessionError`,
//! `SourceError`); `RailFenceError` wraps them for the CLI and shell.

use thiserror::Error;

use crate::fence::KeyError;
use crate::session::SessionError;
use crate::source::SourceError;

/// Main error type for railfence
#[derive(Error, Debug)]
pub enum RailFenceError {
    /// IO errors (stdin, stdout, output files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rail count or start position out of range
    #[error("Invalid rail fence key: {0}")]
    Key(#[from] KeyError),

    /// Operation attempted before its inputs were supplied
    #[error("{0}")]
    Session(#[from] SessionError),

    /// Text could not be read from a file or URL
    #[error("{0}")]
    Source(#[from] SourceError),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (user input, command line values)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for railfence operations
pub type Result<T> = std::result::Result<T, RailFenceError>;

impl RailFenceError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RailFenceError::config("rails must be set");
        assert_eq!(err.to_string(), "Configuration error: rails must be set");

        let err = RailFenceError::validation("no rail count given");
        assert_eq!(err.to_string(), "Validation error: no rail count given");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RailFenceError = io_err.into();
        assert!(matches!(err, RailFenceError::Io(_)));
    }

    #[test]
    fn test_key_error_conversion() {
        let err: RailFenceError = KeyError::RailsOutOfRange { rails: 1 }.into();
        assert!(matches!(err, RailFenceError::Key(_)));
        assert!(err.to_string().starts_with("Invalid rail fence key: "));
    }

    #[test]
    fn test_session_error_is_transparent() {
        let err: RailFenceError = SessionError::MissingText.into();
        assert_eq!(err.to_string(), SessionError::MissingText.to_string());
    }
}
