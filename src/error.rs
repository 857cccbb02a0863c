//! Error types for the phone service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Message returned when an intake record carries an unusable phone number.
pub const INTAKE_INVALID_PHONE_MESSAGE: &str =
    "Invalid phone number format. Please use Kenyan format (e.g., 0705982249 or +254705982249)";

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while accepting a contact inquiry or booking request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// A required text field was blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The phone number could not be normalized
    #[error("{}", INTAKE_INVALID_PHONE_MESSAGE)]
    InvalidPhone(#[source] ValidationError),
}

impl From<ValidationError> for IntakeError {
    fn from(err: ValidationError) -> Self {
        IntakeError::InvalidPhone(err)
    }
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "OFFICE_WHATSAPP_NUMBER".to_string(),
            reason: "Not a Kenyan mobile number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for OFFICE_WHATSAPP_NUMBER: Not a Kenyan mobile number"
        );

        let err = IntakeError::MissingField("email");
        assert_eq!(err.to_string(), "Missing required field: email");
    }

    #[test]
    fn test_invalid_phone_uses_fixed_message() {
        let err: IntakeError = ValidationError::UnrecognizedFormat("123".to_string()).into();
        assert_eq!(err.to_string(), INTAKE_INVALID_PHONE_MESSAGE);
        assert!(std::error::Error::source(&err).is_some());
    }
}
