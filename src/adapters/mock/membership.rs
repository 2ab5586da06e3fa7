//! In-memory membership directory for tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::clinic::{ClinicId, ClinicMembership};
use crate::domain::session::AccessToken;
use crate::domain::tax_id::{clean, Cpf};
use crate::ports::{
    GatewayError, StaffMembershipReader, StaffMembershipWriter, TutorMembershipReader,
};

/// Mock membership directory.
///
/// Staff and tutor links are kept in separate maps, mirroring the two
/// backend directories, and every lookup is counted so tests can assert
/// which directory a login consulted.
#[derive(Debug, Default)]
pub struct MockMembershipDirectory {
    staff: RwLock<HashMap<String, Vec<ClinicMembership>>>,
    tutors: RwLock<HashMap<String, Vec<ClinicMembership>>>,
    staff_lookups: RwLock<u32>,
    tutor_lookups: RwLock<u32>,
    force_error: RwLock<Option<GatewayError>>,
}

impl MockMembershipDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_staff_clinics(self, cpf: &str, clinics: Vec<ClinicMembership>) -> Self {
        self.staff.write().unwrap().insert(clean(cpf), clinics);
        self
    }

    pub fn with_tutor_clinics(self, cpf: &str, clinics: Vec<ClinicMembership>) -> Self {
        self.tutors.write().unwrap().insert(clean(cpf), clinics);
        self
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(self, error: GatewayError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    pub fn staff_lookups(&self) -> u32 {
        *self.staff_lookups.read().unwrap()
    }

    pub fn tutor_lookups(&self) -> u32 {
        *self.tutor_lookups.read().unwrap()
    }

    /// Current staff links for `cpf`.
    pub fn staff_clinics(&self, cpf: &str) -> Vec<ClinicMembership> {
        self.staff
            .read()
            .unwrap()
            .get(&clean(cpf))
            .cloned()
            .unwrap_or_default()
    }

    fn forced(&self) -> Result<(), GatewayError> {
        match self.force_error.read().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StaffMembershipReader for MockMembershipDirectory {
    async fn list_clinics_for_staff(
        &self,
        cpf: &Cpf,
        _token: &AccessToken,
    ) -> Result<Vec<ClinicMembership>, GatewayError> {
        *self.staff_lookups.write().unwrap() += 1;
        self.forced()?;
        Ok(self.staff_clinics(cpf.as_str()))
    }
}

#[async_trait]
impl TutorMembershipReader for MockMembershipDirectory {
    async fn list_clinics_for_tutor(
        &self,
        cpf: &Cpf,
        _token: &AccessToken,
    ) -> Result<Vec<ClinicMembership>, GatewayError> {
        *self.tutor_lookups.write().unwrap() += 1;
        self.forced()?;
        Ok(self
            .tutors
            .read()
            .unwrap()
            .get(cpf.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl StaffMembershipWriter for MockMembershipDirectory {
    async fn link_staff_to_clinic(
        &self,
        cpf: &Cpf,
        clinic_id: &ClinicId,
        _token: &AccessToken,
    ) -> Result<(), GatewayError> {
        self.forced()?;
        self.staff
            .write()
            .unwrap()
            .entry(cpf.as_str().to_string())
            .or_default()
            .push(ClinicMembership::unnamed(clinic_id.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(id: &str) -> ClinicMembership {
        ClinicMembership::new(ClinicId::new(id).unwrap(), format!("Clinic {}", id))
    }

    #[tokio::test]
    async fn directories_are_separate() {
        let cpf = Cpf::parse("52998224725").unwrap();
        let directory = MockMembershipDirectory::new()
            .with_tutor_clinics("529.982.247-25", vec![membership("c-1")]);

        let token = AccessToken::new("tk");

        assert!(directory
            .list_clinics_for_staff(&cpf, &token)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            directory
                .list_clinics_for_tutor(&cpf, &token)
                .await
                .unwrap()
                .len(),
            1
        );
        assert_eq!(directory.staff_lookups(), 1);
        assert_eq!(directory.tutor_lookups(), 1);
    }

    #[tokio::test]
    async fn link_adds_staff_membership() {
        let cpf = Cpf::parse("52998224725").unwrap();
        let directory = MockMembershipDirectory::new();
        directory
            .link_staff_to_clinic(&cpf, &ClinicId::new("c-9").unwrap(), &AccessToken::new("tk"))
            .await
            .unwrap();

        let clinics = directory.staff_clinics("52998224725");
        assert_eq!(clinics.len(), 1);
        assert_eq!(clinics[0].clinic_id.as_str(), "c-9");
    }
}
