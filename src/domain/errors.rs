//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number is not exactly 10 decimal digits.
    InvalidPhoneFormat,

    /// The birthday string is not a real calendar date in DD.MM.YYYY form.
    InvalidDateFormat,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhoneFormat => write!(f, "Phone number must contain 10 digits."),
            Self::InvalidDateFormat => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
