//! HTTP adapter for the backend's membership endpoints.
//!
//! - `GET /funcionario-clinica/funcionario/{cpf}`
//! - `GET /tutor-clinica/tutor/{cpf}`
//! - `POST /funcionario-clinica`

use async_trait::async_trait;

use crate::domain::clinic::{ClinicId, ClinicMembership};
use crate::domain::session::AccessToken;
use crate::domain::tax_id::Cpf;
use crate::ports::{
    GatewayError, StaffMembershipReader, StaffMembershipWriter, TutorMembershipReader,
};

use super::client::{ApiClient, Auth};
use super::dto::{Envelope, LinkFuncionarioBody, MembershipRowDto};

/// Backend membership directory. All calls are authenticated.
#[derive(Debug, Clone)]
pub struct HttpMembershipGateway {
    client: ApiClient,
}

impl HttpMembershipGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn list(
        &self,
        path: &str,
        token: &AccessToken,
    ) -> Result<Vec<ClinicMembership>, GatewayError> {
        let envelope: Envelope<Vec<MembershipRowDto>> =
            self.client.get_json(path, Auth::Token(token)).await?;
        let memberships = envelope.into_memberships()?;
        tracing::debug!(path, count = memberships.len(), "Fetched clinic memberships");
        Ok(memberships)
    }
}

#[async_trait]
impl StaffMembershipReader for HttpMembershipGateway {
    async fn list_clinics_for_staff(
        &self,
        cpf: &Cpf,
        token: &AccessToken,
    ) -> Result<Vec<ClinicMembership>, GatewayError> {
        self.list(&format!("/funcionario-clinica/funcionario/{}", cpf), token)
            .await
    }
}

#[async_trait]
impl TutorMembershipReader for HttpMembershipGateway {
    async fn list_clinics_for_tutor(
        &self,
        cpf: &Cpf,
        token: &AccessToken,
    ) -> Result<Vec<ClinicMembership>, GatewayError> {
        self.list(&format!("/tutor-clinica/tutor/{}", cpf), token)
            .await
    }
}

#[async_trait]
impl StaffMembershipWriter for HttpMembershipGateway {
    async fn link_staff_to_clinic(
        &self,
        cpf: &Cpf,
        clinic_id: &ClinicId,
        token: &AccessToken,
    ) -> Result<(), GatewayError> {
        let body = LinkFuncionarioBody {
            funcionario_cpf: cpf.as_str(),
            clinica_cnpj: clinic_id.as_str(),
        };
        self.client
            .post("/funcionario-clinica", &body, Auth::Token(token))
            .await
    }
}
