//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can surface to the user.
///
/// Every variant is recoverable: the dispatcher prints the message and
/// the session keeps running. No handler mutates state before its
/// validation passes, so a failed command leaves the book unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Phone string is not exactly 10 digits
    #[error("Phone number must contain 10 digits.")]
    InvalidPhoneFormat,

    /// Date string is not a real calendar date in DD.MM.YYYY form
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat,

    /// Edit/remove referenced a phone absent from the record
    #[error("Phone number not found.")]
    PhoneNotFound,

    /// Operation referenced a name absent from the book
    #[error("Contact not found.")]
    ContactNotFound,

    /// A command was invoked with fewer positional arguments than required
    #[error("Enter the argument for the command.")]
    MissingArgument,
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidPhoneFormat => Self::InvalidPhoneFormat,
            ValidationError::InvalidDateFormat => Self::InvalidDateFormat,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file exists but does not decode as an address book
    #[error("Failed to decode address book: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
