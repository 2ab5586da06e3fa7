//! Registration error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::session::LoginError;
use crate::domain::tax_id::TaxIdError;

/// Errors from the registration flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{0}")]
    InvalidIdentifier(#[from] TaxIdError),

    #[error("{0}")]
    InvalidField(#[from] ValidationError),

    #[error("Registration rejected: {0}")]
    Rejected(String),

    #[error("No clinic is active; log in first")]
    NoActiveClinic,

    /// The account was created but signing in with it, or establishing the
    /// resulting session, failed.
    #[error("{0}")]
    Login(#[from] LoginError),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl RegistrationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistrationError::InvalidIdentifier(err) => err.code(),
            RegistrationError::InvalidField(_) => ErrorCode::ValidationFailed,
            RegistrationError::Rejected(_) => ErrorCode::RegistrationRejected,
            RegistrationError::NoActiveClinic => ErrorCode::NoActiveClinic,
            RegistrationError::Login(err) => err.code(),
            RegistrationError::RequestFailed(_) => ErrorCode::RequestFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tax_id::TaxIdKind;

    #[test]
    fn codes_follow_the_wrapped_error() {
        assert_eq!(
            RegistrationError::from(TaxIdError::WrongLength(TaxIdKind::Cnpj)).code(),
            ErrorCode::WrongLength
        );
        assert_eq!(
            RegistrationError::from(LoginError::AuthRejected("no".to_string())).code(),
            ErrorCode::AuthRejected
        );
        assert_eq!(
            RegistrationError::from(ValidationError::empty_field("name")).code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(RegistrationError::NoActiveClinic.code(), ErrorCode::NoActiveClinic);
    }

    #[test]
    fn rejected_shows_service_message() {
        let err = RegistrationError::Rejected("CPF já cadastrado".to_string());
        assert_eq!(err.to_string(), "Registration rejected: CPF já cadastrado");
    }
}
