//! Auth gateway port - the remote authentication service.
//!
//! # Contract
//!
//! Implementations must:
//! - Return a `LoginGrant` only when the service issued a token
//! - Return `GatewayError::Rejected` with the service's message for non-2xx answers
//! - Return `GatewayError::Transport` when the service could not be reached
//! - Never log the password or the token

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::registration::{RegisterStaffRequest, RegisterTutorRequest};
use crate::domain::session::{AccessToken, CoarseUserType, UserExtraData};
use crate::domain::tax_id::Cpf;

use super::GatewayError;

/// What the auth service returns for accepted credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: AccessToken,
    pub user_type: CoarseUserType,
    pub extra_data: Option<UserExtraData>,
    pub display_name: Option<String>,
}

impl LoginGrant {
    pub fn new(token: AccessToken, user_type: CoarseUserType) -> Self {
        Self {
            token,
            user_type,
            extra_data: None,
            display_name: None,
        }
    }

    pub fn with_extra_data(mut self, extra: UserExtraData) -> Self {
        self.extra_data = Some(extra);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges CPF and password for a bearer token.
    async fn login(&self, cpf: &Cpf, secret: &SecretString) -> Result<LoginGrant, GatewayError>;

    /// Creates a staff account.
    async fn register_staff(&self, request: &RegisterStaffRequest) -> Result<(), GatewayError>;

    /// Creates a tutor account linked to the given clinics.
    async fn register_tutor(&self, request: &RegisterTutorRequest) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let grant = LoginGrant::new(AccessToken::new("t"), CoarseUserType::Staff)
            .with_extra_data(UserExtraData::with_job_title("Administrador"))
            .with_display_name("Ana");

        assert_eq!(grant.display_name.as_deref(), Some("Ana"));
        assert_eq!(
            grant.extra_data.and_then(|e| e.job_title).as_deref(),
            Some("Administrador")
        );
    }

    #[test]
    fn auth_gateway_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn AuthGateway) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn AuthGateway>>();
    }
}
