//! Wire formats of the auth and backend APIs.
//!
//! Both services answer with `{ success, data, message, error }` and use
//! Portuguese camelCase field names. These types stay private to the HTTP
//! adapters; everything crossing into the domain is converted first.

use serde::{Deserialize, Serialize};

use crate::domain::clinic::{ClinicId, ClinicMembership};
use crate::domain::session::{AccessToken, CoarseUserType, UserExtraData};
use crate::ports::{GatewayError, LoginGrant};

/// Standard response envelope. `success` is not consulted: the HTTP
/// status already decided success or failure.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

// =============================================================================
// Auth API
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub cpf: &'a str,
    pub senha: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub token: Option<String>,
    pub usuario: Option<UsuarioDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsuarioDto {
    pub nome: Option<String>,
    #[serde(default)]
    pub tipo_usuario: String,
    pub dados_adicionais: Option<DadosAdicionaisDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DadosAdicionaisDto {
    pub cargo: Option<String>,
}

impl Envelope<LoginData> {
    /// Converts a login answer, insisting on a token.
    pub fn into_grant(self) -> Result<LoginGrant, GatewayError> {
        let message = self.message;
        let data = self.data.ok_or_else(|| {
            GatewayError::decode(message.unwrap_or_else(|| "login response without data".into()))
        })?;

        let token = data
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| GatewayError::decode("login response without token"))?;

        let mut grant = LoginGrant::new(AccessToken::new(token), CoarseUserType::Other(String::new()));
        if let Some(usuario) = data.usuario {
            grant.user_type = CoarseUserType::parse(&usuario.tipo_usuario);
            grant.display_name = usuario.nome;
            grant.extra_data = usuario.dados_adicionais.map(|d| UserExtraData {
                job_title: d.cargo,
            });
        }
        Ok(grant)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterFuncionarioBody<'a> {
    pub cpf: &'a str,
    pub nome: &'a str,
    pub email: &'a str,
    pub senha: &'a str,
    pub cargo: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registro_profissional: Option<&'a str>,
    pub nivel_acesso: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterTutorBody<'a> {
    pub cpf: &'a str,
    pub nome: &'a str,
    pub email: &'a str,
    pub senha: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<&'a str>,
    pub clinicas: Vec<&'a str>,
}

// =============================================================================
// Backend API
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MembershipRowDto {
    pub clinica_cnpj: String,
    pub clinica: Option<ClinicaDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClinicaDto {
    pub cnpj: String,
    #[serde(default)]
    pub nome: Option<String>,
    pub email: Option<String>,
}

impl MembershipRowDto {
    /// Prefers the embedded clinic record; falls back to the bare CNPJ.
    pub fn into_membership(self) -> Result<ClinicMembership, GatewayError> {
        match self.clinica {
            Some(clinica) => {
                let id = ClinicId::new(clinica.cnpj)
                    .map_err(|e| GatewayError::decode(e.to_string()))?;
                Ok(ClinicMembership {
                    clinic_id: id,
                    clinic_name: clinica.nome.unwrap_or_default(),
                    email: clinica.email,
                })
            }
            None => {
                let id = ClinicId::new(self.clinica_cnpj)
                    .map_err(|e| GatewayError::decode(e.to_string()))?;
                Ok(ClinicMembership::unnamed(id))
            }
        }
    }
}

impl Envelope<Vec<MembershipRowDto>> {
    /// A missing `data` field means no memberships.
    pub fn into_memberships(self) -> Result<Vec<ClinicMembership>, GatewayError> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(MembershipRowDto::into_membership)
            .collect()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LinkFuncionarioBody<'a> {
    pub funcionario_cpf: &'a str,
    pub clinica_cnpj: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateClinicaBody<'a> {
    pub cnpj: &'a str,
    pub nome: &'a str,
    pub endereco: &'a str,
    pub telefone: &'a str,
    pub email: &'a str,
    pub administrador_cpf: &'a str,
}
