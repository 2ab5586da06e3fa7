//! RegisterTutorHandler - registers a pet owner with the active clinic.

use std::sync::Arc;

use secrecy::SecretString;

use crate::application::SessionHandle;
use crate::domain::registration::{optional, required, RegisterTutorRequest, RegistrationError};
use crate::domain::tax_id::Cpf;
use crate::ports::AuthGateway;

/// Tutor sign-up form.
#[derive(Debug)]
pub struct RegisterTutorCommand {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub secret: SecretString,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Registers tutors into the clinic of the current session.
pub struct RegisterTutorHandler {
    auth: Arc<dyn AuthGateway>,
    session: SessionHandle,
}

impl RegisterTutorHandler {
    pub fn new(auth: Arc<dyn AuthGateway>, session: SessionHandle) -> Self {
        Self { auth, session }
    }

    /// # Errors
    ///
    /// - `InvalidIdentifier` / `InvalidField` for bad form input (no network call)
    /// - `NoActiveClinic` if nobody is logged in (no network call)
    /// - `Rejected` / `RequestFailed` from the auth service
    pub async fn handle(&self, cmd: RegisterTutorCommand) -> Result<Cpf, RegistrationError> {
        let cpf = Cpf::parse(&cmd.cpf)?;
        let name = required("name", &cmd.name)?;
        let email = required("email", &cmd.email)?;

        let clinic_id = self
            .session
            .snapshot()
            .await
            .clinic_id()
            .cloned()
            .ok_or(RegistrationError::NoActiveClinic)?;

        let request = RegisterTutorRequest {
            cpf: cpf.clone(),
            name,
            email,
            secret: cmd.secret,
            phone: optional(cmd.phone.as_deref()),
            address: optional(cmd.address.as_deref()),
            clinics: vec![clinic_id.clone()],
        };
        self.auth.register_tutor(&request).await?;

        tracing::info!(%clinic_id, "Tutor registered");
        Ok(cpf)
    }
}
