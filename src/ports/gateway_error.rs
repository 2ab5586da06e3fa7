//! Errors shared by every remote collaborator port.

use thiserror::Error;

use crate::domain::registration::RegistrationError;
use crate::domain::session::LoginError;

/// Failure talking to the auth or backend API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer (DNS, connect, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// The answer could not be understood.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        GatewayError::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        GatewayError::Decode(message.into())
    }

    /// True for 4xx answers, i.e. the service refused this request.
    pub fn is_client_rejection(&self) -> bool {
        matches!(self, GatewayError::Rejected { status, .. } if (400..500).contains(status))
    }

    /// Maps a failure of the auth service's login call.
    ///
    /// Only a 4xx answer means the credentials were refused.
    pub fn into_login_error(self) -> LoginError {
        if self.is_client_rejection() {
            LoginError::AuthRejected(self.to_string())
        } else {
            LoginError::RequestFailed(self.to_string())
        }
    }
}

impl From<GatewayError> for LoginError {
    fn from(err: GatewayError) -> Self {
        LoginError::RequestFailed(err.to_string())
    }
}

impl From<GatewayError> for RegistrationError {
    fn from(err: GatewayError) -> Self {
        if err.is_client_rejection() {
            RegistrationError::Rejected(err.to_string())
        } else {
            RegistrationError::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_service_message() {
        let err = GatewayError::rejected(401, "Credenciais inválidas");
        assert_eq!(err.to_string(), "Credenciais inválidas");
    }

    #[test]
    fn only_4xx_login_failures_are_auth_rejections() {
        assert_eq!(
            GatewayError::rejected(401, "bad password").into_login_error(),
            LoginError::AuthRejected("bad password".to_string())
        );
        assert_eq!(
            GatewayError::rejected(503, "HTTP 503").into_login_error(),
            LoginError::RequestFailed("HTTP 503".to_string())
        );
        assert_eq!(
            GatewayError::transport("connection refused").into_login_error(),
            LoginError::RequestFailed("connection refused".to_string())
        );
    }

    #[test]
    fn generic_conversion_is_request_failed() {
        let err: LoginError = GatewayError::rejected(404, "not found").into();
        assert_eq!(err, LoginError::RequestFailed("not found".to_string()));
    }

    #[test]
    fn registration_conflict_is_rejected() {
        let err: RegistrationError = GatewayError::rejected(409, "CPF já cadastrado").into();
        assert_eq!(err, RegistrationError::Rejected("CPF já cadastrado".to_string()));

        let err: RegistrationError = GatewayError::transport("timed out").into();
        assert_eq!(err, RegistrationError::RequestFailed("timed out".to_string()));
    }
}
