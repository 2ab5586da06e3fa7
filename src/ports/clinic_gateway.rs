//! Clinic gateway port - clinic records on the backend.

use async_trait::async_trait;

use crate::domain::registration::CreateClinicRequest;
use crate::domain::session::AccessToken;

use super::GatewayError;

#[async_trait]
pub trait ClinicGateway: Send + Sync {
    /// Creates a clinic on behalf of the administrator holding `token`.
    async fn create_clinic(
        &self,
        request: &CreateClinicRequest,
        token: &AccessToken,
    ) -> Result<(), GatewayError>;
}
