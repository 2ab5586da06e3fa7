//! Clinic module - clinic identifiers and memberships.
//!
//! Clinic records are owned by the backend service. The client only needs
//! to know which clinics a person belongs to and which one is active.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;
use crate::domain::tax_id::Cnpj;

/// Identifier of a clinic, used as the active working context.
///
/// The backend keys clinics by CNPJ. Memberships returned by the backend
/// are not re-validated, so this only requires a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClinicId(String);

impl ClinicId {
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("clinic_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Cnpj> for ClinicId {
    fn from(cnpj: &Cnpj) -> Self {
        Self(cnpj.as_str().to_string())
    }
}

impl fmt::Display for ClinicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Link between a person and one clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicMembership {
    pub clinic_id: ClinicId,
    pub clinic_name: String,
    pub email: Option<String>,
}

impl ClinicMembership {
    pub fn new(clinic_id: ClinicId, clinic_name: impl Into<String>) -> Self {
        Self {
            clinic_id,
            clinic_name: clinic_name.into(),
            email: None,
        }
    }

    /// A membership whose clinic record was not embedded in the response.
    pub fn unnamed(clinic_id: ClinicId) -> Self {
        Self::new(clinic_id, "")
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clinic_id_trims_and_rejects_blank() {
        assert_eq!(ClinicId::new(" 11222333000181 ").unwrap().as_str(), "11222333000181");
        assert_eq!(
            ClinicId::new("  "),
            Err(ValidationError::empty_field("clinic_id"))
        );
    }

    #[test]
    fn clinic_id_from_cnpj_uses_digits() {
        let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
        assert_eq!(ClinicId::from(&cnpj).as_str(), "11222333000181");
    }

    #[test]
    fn unnamed_membership_has_empty_name_and_no_email() {
        let membership = ClinicMembership::unnamed(ClinicId::new("c-1").unwrap());
        assert_eq!(membership.clinic_name, "");
        assert_eq!(membership.email, None);
    }

    #[test]
    fn with_email_sets_contact() {
        let membership = ClinicMembership::new(ClinicId::new("c-1").unwrap(), "Vet Center")
            .with_email("contato@vet.example");
        assert_eq!(membership.email.as_deref(), Some("contato@vet.example"));
    }
}
