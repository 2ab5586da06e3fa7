//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Machine-readable error kinds carried next to user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Identifier validation
    MissingValue,
    WrongLength,
    RepeatedDigits,
    ChecksumMismatch,

    // Login flow
    AuthRejected,
    UnknownUserType,
    NoClinicMembership,
    InvalidClinicChoice,
    InvalidStateTransition,

    // Registration
    ValidationFailed,
    RegistrationRejected,
    NoActiveClinic,

    // Infrastructure
    RequestFailed,
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingValue => "MISSING_VALUE",
            ErrorCode::WrongLength => "WRONG_LENGTH",
            ErrorCode::RepeatedDigits => "REPEATED_DIGITS",
            ErrorCode::ChecksumMismatch => "CHECKSUM_MISMATCH",
            ErrorCode::AuthRejected => "AUTH_REJECTED",
            ErrorCode::UnknownUserType => "UNKNOWN_USER_TYPE",
            ErrorCode::NoClinicMembership => "NO_CLINIC_MEMBERSHIP",
            ErrorCode::InvalidClinicChoice => "INVALID_CLINIC_CHOICE",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::RegistrationRejected => "REGISTRATION_REJECTED",
            ErrorCode::NoActiveClinic => "NO_ACTIVE_CLINIC",
            ErrorCode::RequestFailed => "REQUEST_FAILED",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("clinic_id");
        assert_eq!(format!("{}", err), "Field 'clinic_id' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("state_transition", "Idle -> SessionReady");
        assert_eq!(
            format!("{}", err),
            "Field 'state_transition' has invalid format: Idle -> SessionReady"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ChecksumMismatch), "CHECKSUM_MISMATCH");
        assert_eq!(format!("{}", ErrorCode::NoClinicMembership), "NO_CLINIC_MEMBERSHIP");
        assert_eq!(format!("{}", ErrorCode::RequestFailed), "REQUEST_FAILED");
    }
}
