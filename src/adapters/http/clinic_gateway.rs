//! HTTP adapter for the backend's clinic endpoint (`POST /clinicas`).

use async_trait::async_trait;

use crate::domain::registration::CreateClinicRequest;
use crate::domain::session::AccessToken;
use crate::ports::{ClinicGateway, GatewayError};

use super::client::{ApiClient, Auth};
use super::dto::CreateClinicaBody;

#[derive(Debug, Clone)]
pub struct HttpClinicGateway {
    client: ApiClient,
}

impl HttpClinicGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClinicGateway for HttpClinicGateway {
    async fn create_clinic(
        &self,
        request: &CreateClinicRequest,
        token: &AccessToken,
    ) -> Result<(), GatewayError> {
        let body = CreateClinicaBody {
            cnpj: request.cnpj.as_str(),
            nome: &request.name,
            endereco: &request.address,
            telefone: &request.phone,
            email: &request.email,
            administrador_cpf: request.administrator_cpf.as_str(),
        };
        self.client
            .post("/clinicas", &body, Auth::Token(token))
            .await?;
        tracing::info!(cnpj = %request.cnpj, "Clinic created");
        Ok(())
    }
}
