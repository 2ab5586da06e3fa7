//! Login flow error types.

use thiserror::Error;

use crate::domain::clinic::ClinicId;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::tax_id::TaxIdError;

/// Why a login attempt ended without a session.
///
/// Every variant is terminal for the attempt; a retry is a fresh submission.
/// `Display` gives the message shown to the user, `code()` the machine
/// readable kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// The identifier failed client-side validation; nothing was sent.
    #[error("{0}")]
    InvalidIdentifier(#[from] TaxIdError),

    #[error("Login rejected: {0}")]
    AuthRejected(String),

    #[error("Logged in, but the user profile '{0}' is not recognised")]
    UnknownUserType(String),

    #[error("User is not linked to any clinic")]
    NoClinicMembership,

    #[error("Clinic {0} was not offered for this login")]
    InvalidClinicChoice(ClinicId),

    #[error("Invalid login state: {0}")]
    InvalidState(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Could not store session: {0}")]
    Storage(String),
}

impl LoginError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoginError::InvalidIdentifier(err) => err.code(),
            LoginError::AuthRejected(_) => ErrorCode::AuthRejected,
            LoginError::UnknownUserType(_) => ErrorCode::UnknownUserType,
            LoginError::NoClinicMembership => ErrorCode::NoClinicMembership,
            LoginError::InvalidClinicChoice(_) => ErrorCode::InvalidClinicChoice,
            LoginError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            LoginError::RequestFailed(_) => ErrorCode::RequestFailed,
            LoginError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for LoginError {
    fn from(err: ValidationError) -> Self {
        LoginError::InvalidState(err.to_string())
    }
}
