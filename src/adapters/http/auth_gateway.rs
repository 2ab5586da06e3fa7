//! HTTP adapter for the auth API.
//!
//! - `POST /auth/login`
//! - `POST /auth/register/funcionario`
//! - `POST /auth/register/tutor`

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::registration::{RegisterStaffRequest, RegisterTutorRequest};
use crate::domain::tax_id::Cpf;
use crate::ports::{AuthGateway, GatewayError, LoginGrant};

use super::client::{ApiClient, Auth};
use super::dto::{Envelope, LoginBody, LoginData, RegisterFuncionarioBody, RegisterTutorBody};

/// Auth API client. Calls are never authenticated.
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, cpf: &Cpf, secret: &SecretString) -> Result<LoginGrant, GatewayError> {
        let body = LoginBody {
            cpf: cpf.as_str(),
            senha: secret.expose_secret(),
        };
        let envelope: Envelope<LoginData> = self
            .client
            .post_json("/auth/login", &body, Auth::Anonymous)
            .await?;

        let grant = envelope.into_grant()?;
        tracing::debug!(user_type = ?grant.user_type, "Login accepted by auth API");
        Ok(grant)
    }

    async fn register_staff(&self, request: &RegisterStaffRequest) -> Result<(), GatewayError> {
        let body = RegisterFuncionarioBody {
            cpf: request.cpf.as_str(),
            nome: &request.name,
            email: &request.email,
            senha: request.secret.expose_secret(),
            cargo: &request.job_title,
            registro_profissional: request.professional_registry.as_deref(),
            nivel_acesso: request.access_level,
        };
        self.client
            .post("/auth/register/funcionario", &body, Auth::Anonymous)
            .await
    }

    async fn register_tutor(&self, request: &RegisterTutorRequest) -> Result<(), GatewayError> {
        let body = RegisterTutorBody {
            cpf: request.cpf.as_str(),
            nome: &request.name,
            email: &request.email,
            senha: request.secret.expose_secret(),
            telefone: request.phone.as_deref(),
            endereco: request.address.as_deref(),
            clinicas: request.clinics.iter().map(|c| c.as_str()).collect(),
        };
        self.client
            .post("/auth/register/tutor", &body, Auth::Anonymous)
            .await
    }
}
