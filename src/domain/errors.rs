//! Domain validation errors.

use std::fmt;

/// User-facing message shown whenever a phone number cannot be understood.
pub const INVALID_PHONE_MESSAGE: &str =
    "Please enter a valid Kenyan phone number (e.g., 0705982249 or +254705982249)";

/// Errors that can occur during domain value object validation.
///
/// Every unparseable phone input collapses into one kind. Wrong country,
/// wrong length and non-numeric garbage are not told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input does not match any known Kenyan phone shape.
    UnrecognizedFormat(String),
}

impl ValidationError {
    /// The message to show next to the form field.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UnrecognizedFormat(_) => INVALID_PHONE_MESSAGE,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedFormat(phone) => {
                write!(f, "Unrecognized Kenyan phone number: {}", phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
