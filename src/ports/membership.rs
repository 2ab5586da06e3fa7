//! Membership ports - which clinics a person belongs to.
//!
//! Staff (including administrators) and tutors live in separate backend
//! directories, hence separate reader ports. Every call runs before the
//! session is persisted (during login or clinic registration), so each
//! takes the fresh token explicitly.

use async_trait::async_trait;

use crate::domain::clinic::{ClinicId, ClinicMembership};
use crate::domain::session::AccessToken;
use crate::domain::tax_id::Cpf;

use super::GatewayError;

#[async_trait]
pub trait StaffMembershipReader: Send + Sync {
    /// Clinics a staff member works at. May be empty.
    async fn list_clinics_for_staff(
        &self,
        cpf: &Cpf,
        token: &AccessToken,
    ) -> Result<Vec<ClinicMembership>, GatewayError>;
}

#[async_trait]
pub trait TutorMembershipReader: Send + Sync {
    /// Clinics a tutor is registered with. May be empty.
    async fn list_clinics_for_tutor(
        &self,
        cpf: &Cpf,
        token: &AccessToken,
    ) -> Result<Vec<ClinicMembership>, GatewayError>;
}

#[async_trait]
pub trait StaffMembershipWriter: Send + Sync {
    /// Links a staff member to a clinic.
    async fn link_staff_to_clinic(
        &self,
        cpf: &Cpf,
        clinic_id: &ClinicId,
        token: &AccessToken,
    ) -> Result<(), GatewayError>;
}
