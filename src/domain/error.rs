//! Error types for the HR desk.
//!
//! This module defines the centralized error type [`HrdeskError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors fall into two groups. Action errors (`NotFound`, `MalformedPayload`,
//! `InvalidShape`, `InvalidPageSize`, `DialogClosed`, `Command`) are local to one
//! user action: the event handler reports them as a notice and the session carries
//! on. Environment errors (`Io`, `Theme`, `Config`) come from the runtime shell and
//! are propagated to the caller.

use crate::domain::record::RecordId;
use thiserror::Error;

/// The main error type for HR desk operations.
///
/// # Examples
///
/// ```
/// use hrdesk::domain::HrdeskError;
///
/// let err = HrdeskError::NotFound(42);
/// assert!(err.is_recoverable());
/// assert_eq!(err.to_string(), "Record 42 not found");
/// ```
#[derive(Debug, Error)]
pub enum HrdeskError {
    /// An update, delete, or edit targeted an identifier that is not in the store.
    #[error("Record {0} not found")]
    NotFound(RecordId),

    /// Import text could not be parsed as JSON.
    #[error("Import failed: invalid JSON format")]
    MalformedPayload(#[source] serde_json::Error),

    /// Import text parsed, but the top-level value is not an array.
    ///
    /// The string names the JSON type that was found instead.
    #[error("Invalid data format: expected an array, found {0}")]
    InvalidShape(&'static str),

    /// A page size outside the allowed set was requested.
    #[error("Page size {0} is not supported (choose 5, 10 or 25)")]
    InvalidPageSize(usize),

    /// A draft operation was attempted while no add/edit dialog is open.
    #[error("No add or edit dialog is open")]
    DialogClosed,

    /// A console command could not be understood.
    #[error("Invalid command: {0}")]
    Command(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HrdeskError {
    /// Returns `true` for errors scoped to a single user action.
    ///
    /// Recoverable errors never leave a store half-mutated, so the handler can
    /// surface them as a notice and keep the session running.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::MalformedPayload(_)
                | Self::InvalidShape(_)
                | Self::InvalidPageSize(_)
                | Self::DialogClosed
                | Self::Command(_)
        )
    }
}

/// A specialized `Result` type for HR desk operations.
pub type Result<T> = std::result::Result<T, HrdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_errors_are_recoverable() {
        assert!(HrdeskError::NotFound(3).is_recoverable());
        assert!(HrdeskError::InvalidShape("object").is_recoverable());
        assert!(HrdeskError::DialogClosed.is_recoverable());
        assert!(HrdeskError::InvalidPageSize(7).is_recoverable());
    }

    #[test]
    fn environment_errors_are_not_recoverable() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!HrdeskError::from(io).is_recoverable());
        assert!(!HrdeskError::Config("bad".into()).is_recoverable());
        assert!(!HrdeskError::Theme("bad".into()).is_recoverable());
    }

    #[test]
    fn malformed_payload_keeps_parser_error_as_source() {
        use std::error::Error as _;

        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = HrdeskError::MalformedPayload(parse_err);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Import failed: invalid JSON format");
    }
}
