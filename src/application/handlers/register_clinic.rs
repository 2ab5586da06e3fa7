//! RegisterClinicHandler - signs up an administrator together with their clinic.
//!
//! Steps, in order:
//!
//! 1. Validate admin CPF, clinic CNPJ and required fields
//! 2. Register the admin as staff with the administrator job title
//! 3. Log in as the new admin
//! 4. Create the clinic and link the admin to it, using the fresh token
//! 5. Establish the admin's session on the new clinic
//!
//! Nothing is persisted before step 5. A failure in steps 2-4 leaves the
//! store and any current session as they were.

use std::sync::Arc;

use secrecy::SecretString;

use crate::application::SessionHandle;
use crate::domain::clinic::ClinicId;
use crate::domain::registration::{
    optional, required, CreateClinicRequest, RegisterStaffRequest, RegistrationError,
    ADMIN_ACCESS_LEVEL, ADMIN_JOB_TITLE_DISPLAY,
};
use crate::domain::session::{ResolvedSession, Role};
use crate::domain::tax_id::{Cnpj, Cpf};
use crate::ports::{AuthGateway, ClinicGateway, SessionStore, StaffMembershipWriter};

/// Administrator and clinic sign-up form.
#[derive(Debug)]
pub struct RegisterClinicCommand {
    pub admin_cpf: String,
    pub admin_name: String,
    pub admin_email: String,
    pub secret: SecretString,
    pub professional_registry: Option<String>,
    pub clinic_cnpj: String,
    pub clinic_name: String,
    pub clinic_address: String,
    pub clinic_phone: String,
    pub clinic_email: String,
}

pub struct RegisterClinicHandler {
    auth: Arc<dyn AuthGateway>,
    clinics: Arc<dyn ClinicGateway>,
    staff_writer: Arc<dyn StaffMembershipWriter>,
    store: Arc<dyn SessionStore>,
    session: SessionHandle,
}

impl RegisterClinicHandler {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        clinics: Arc<dyn ClinicGateway>,
        staff_writer: Arc<dyn StaffMembershipWriter>,
        store: Arc<dyn SessionStore>,
        session: SessionHandle,
    ) -> Self {
        Self {
            auth,
            clinics,
            staff_writer,
            store,
            session,
        }
    }

    /// Registers admin and clinic and returns the admin's session.
    pub async fn handle(
        &self,
        cmd: RegisterClinicCommand,
    ) -> Result<ResolvedSession, RegistrationError> {
        let admin_cpf = Cpf::parse(&cmd.admin_cpf)?;
        let cnpj = Cnpj::parse(&cmd.clinic_cnpj)?;

        let staff = RegisterStaffRequest {
            cpf: admin_cpf.clone(),
            name: required("admin_name", &cmd.admin_name)?,
            email: required("admin_email", &cmd.admin_email)?,
            secret: cmd.secret,
            job_title: ADMIN_JOB_TITLE_DISPLAY.to_string(),
            professional_registry: optional(cmd.professional_registry.as_deref()),
            access_level: ADMIN_ACCESS_LEVEL,
        };
        let clinic = CreateClinicRequest {
            cnpj,
            name: required("clinic_name", &cmd.clinic_name)?,
            address: required("clinic_address", &cmd.clinic_address)?,
            phone: required("clinic_phone", &cmd.clinic_phone)?,
            email: required("clinic_email", &cmd.clinic_email)?,
            administrator_cpf: admin_cpf,
        };

        self.auth.register_staff(&staff).await?;
        tracing::info!("Administrator registered");

        let grant = self
            .auth
            .login(&staff.cpf, &staff.secret)
            .await
            .map_err(|e| e.into_login_error())?;
        let role = Role::classify(&grant.user_type, grant.extra_data.as_ref())?;

        if let Err(err) = self.clinics.create_clinic(&clinic, &grant.token).await {
            tracing::warn!(cnpj = %clinic.cnpj, "Clinic creation failed: {}", err);
            return Err(err.into());
        }

        let clinic_id = ClinicId::from(&clinic.cnpj);
        self.staff_writer
            .link_staff_to_clinic(&clinic.administrator_cpf, &clinic_id, &grant.token)
            .await?;

        let resolved = ResolvedSession::new(grant.token, role, clinic_id);
        let resolved = self
            .session
            .establish(self.store.as_ref(), resolved)
            .await?;
        tracing::info!(clinic_id = %resolved.clinic_id(), "Clinic registered");
        Ok(resolved)
    }
}
