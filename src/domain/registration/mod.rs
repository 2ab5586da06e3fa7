//! Registration requests.
//!
//! Built only from validated identifiers, so nothing reaches the auth or
//! backend services with a malformed CPF or CNPJ.

mod errors;

pub use errors::RegistrationError;

use secrecy::SecretString;

use crate::domain::clinic::ClinicId;
use crate::domain::foundation::ValidationError;
use crate::domain::tax_id::{Cnpj, Cpf};

/// Access level the backend grants to clinic administrators.
pub const ADMIN_ACCESS_LEVEL: u8 = 5;

/// Job title stored for administrators at registration.
pub const ADMIN_JOB_TITLE_DISPLAY: &str = "Administrador";

/// New staff account.
#[derive(Debug)]
pub struct RegisterStaffRequest {
    pub cpf: Cpf,
    pub name: String,
    pub email: String,
    pub secret: SecretString,
    pub job_title: String,
    pub professional_registry: Option<String>,
    pub access_level: u8,
}

/// New tutor (pet owner) account, linked to clinics on creation.
#[derive(Debug)]
pub struct RegisterTutorRequest {
    pub cpf: Cpf,
    pub name: String,
    pub email: String,
    pub secret: SecretString,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub clinics: Vec<ClinicId>,
}

/// New clinic record.
#[derive(Debug, Clone)]
pub struct CreateClinicRequest {
    pub cnpj: Cnpj,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub administrator_cpf: Cpf,
}

/// Trims a required form field, rejecting blank values.
pub fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional form field; blank becomes `None`.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
