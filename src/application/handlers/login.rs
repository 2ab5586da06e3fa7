//! LoginHandler - turns a credential submission into a resolved session.
//!
//! One attempt walks the [`LoginStatus`] machine:
//!
//! 1. Validate the CPF locally (no network call on failure)
//! 2. Authenticate and classify the role
//! 3. Look up clinic memberships in the directory matching the role
//! 4. With one clinic, establish the session at once; with several, hand a
//!    [`PendingClinicChoice`] back to the caller
//!
//! Nothing is persisted before the session is ready, so a failed or
//! abandoned attempt leaves the store as it was.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::SessionHandle;
use crate::domain::clinic::{ClinicId, ClinicMembership};
use crate::domain::foundation::StateMachine;
use crate::domain::session::{
    AccessToken, LoginError, LoginStatus, MembershipKind, ResolvedSession, Role,
};
use crate::domain::tax_id::Cpf;
use crate::ports::{AuthGateway, SessionStore, StaffMembershipReader, TutorMembershipReader};

/// Credentials as typed by the user.
#[derive(Debug)]
pub struct LoginCommand {
    /// Raw CPF, with or without punctuation.
    pub identifier: String,
    pub secret: SecretString,
}

impl LoginCommand {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecretString::new(secret.into()),
        }
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Exactly one clinic; the session is established.
    Ready(ResolvedSession),
    /// Several clinics; call [`LoginHandler::choose_clinic`].
    ChooseClinic(PendingClinicChoice),
}

/// An authenticated login waiting for the user to pick a clinic.
///
/// Holds the token in memory only. Dropping it abandons the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingClinicChoice {
    attempt_id: Uuid,
    token: AccessToken,
    role: Role,
    clinics: Vec<ClinicMembership>,
}

impl PendingClinicChoice {
    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Clinics offered, in directory order.
    pub fn clinics(&self) -> &[ClinicMembership] {
        &self.clinics
    }

    fn offers(&self, clinic_id: &ClinicId) -> bool {
        self.clinics.iter().any(|c| &c.clinic_id == clinic_id)
    }
}

/// Tracks one attempt through the login states.
struct LoginAttempt {
    id: Uuid,
    status: LoginStatus,
}

impl LoginAttempt {
    fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: LoginStatus::Idle,
        }
    }

    fn resume(id: Uuid) -> Self {
        Self {
            id,
            status: LoginStatus::AwaitingClinicChoice,
        }
    }

    fn advance(&mut self, next: LoginStatus) -> Result<(), LoginError> {
        self.status = self.status.transition_to(next)?;
        tracing::debug!(status = ?self.status, "Login status changed");
        Ok(())
    }

    /// Falls back to `Idle` and returns the status the attempt failed in.
    fn abort(&mut self) -> LoginStatus {
        let failed_at = self.status;
        if self.status.can_transition_to(&LoginStatus::Idle) {
            self.status = LoginStatus::Idle;
        }
        failed_at
    }
}

/// Handler for the login flow.
pub struct LoginHandler {
    auth: Arc<dyn AuthGateway>,
    staff_directory: Arc<dyn StaffMembershipReader>,
    tutor_directory: Arc<dyn TutorMembershipReader>,
    store: Arc<dyn SessionStore>,
    session: SessionHandle,
}

impl LoginHandler {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        staff_directory: Arc<dyn StaffMembershipReader>,
        tutor_directory: Arc<dyn TutorMembershipReader>,
        store: Arc<dyn SessionStore>,
        session: SessionHandle,
    ) -> Self {
        Self {
            auth,
            staff_directory,
            tutor_directory,
            store,
            session,
        }
    }

    /// Submits credentials.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` if the CPF fails local validation
    /// - `AuthRejected` if the auth service refused the credentials
    /// - `UnknownUserType` if the user type is not staff or tutor
    /// - `NoClinicMembership` if the user belongs to no clinic
    /// - `RequestFailed` for transport or server failures
    /// - `Storage` if the session could not be persisted
    pub async fn submit(&self, cmd: LoginCommand) -> Result<LoginOutcome, LoginError> {
        let mut attempt = LoginAttempt::start();
        let span = tracing::info_span!("login", attempt_id = %attempt.id);

        let result = self.run(&mut attempt, cmd).instrument(span.clone()).await;
        if let Err(err) = &result {
            let failed_at = attempt.abort();
            span.in_scope(|| {
                tracing::warn!(
                    code = %err.code(),
                    ?failed_at,
                    status = ?attempt.status,
                    "Login failed: {}",
                    err
                )
            });
        }
        result
    }

    async fn run(
        &self,
        attempt: &mut LoginAttempt,
        cmd: LoginCommand,
    ) -> Result<LoginOutcome, LoginError> {
        let cpf = Cpf::parse(&cmd.identifier)?;

        attempt.advance(LoginStatus::Authenticating)?;
        let grant = self
            .auth
            .login(&cpf, &cmd.secret)
            .await
            .map_err(|e| e.into_login_error())?;
        let role = Role::classify(&grant.user_type, grant.extra_data.as_ref())?;
        tracing::debug!(%role, "User authenticated");

        attempt.advance(LoginStatus::ResolvingMembership)?;
        let mut clinics = self.memberships(role, &cpf, &grant.token).await?;

        match clinics.len() {
            0 => Err(LoginError::NoClinicMembership),
            1 => {
                attempt.advance(LoginStatus::SessionReady)?;
                let clinic = clinics.remove(0);
                let resolved = ResolvedSession::new(grant.token, role, clinic.clinic_id);
                let resolved = self.session.establish(self.store.as_ref(), resolved).await?;
                tracing::info!(%role, clinic_id = %resolved.clinic_id(), "Session ready");
                Ok(LoginOutcome::Ready(resolved))
            }
            count => {
                attempt.advance(LoginStatus::AwaitingClinicChoice)?;
                tracing::info!(count, "Awaiting clinic choice");
                Ok(LoginOutcome::ChooseClinic(PendingClinicChoice {
                    attempt_id: attempt.id,
                    token: grant.token,
                    role,
                    clinics,
                }))
            }
        }
    }

    async fn memberships(
        &self,
        role: Role,
        cpf: &Cpf,
        token: &AccessToken,
    ) -> Result<Vec<ClinicMembership>, LoginError> {
        let clinics = match role.membership_kind() {
            MembershipKind::Staff => {
                self.staff_directory
                    .list_clinics_for_staff(cpf, token)
                    .await
            }
            MembershipKind::Tutor => {
                self.tutor_directory
                    .list_clinics_for_tutor(cpf, token)
                    .await
            }
        };
        Ok(clinics?)
    }

    /// Completes a multi-clinic login with the clinic the user picked.
    ///
    /// # Errors
    ///
    /// - `InvalidClinicChoice` if `clinic_id` was not offered; nothing is persisted
    /// - `Storage` if the session could not be persisted
    pub async fn choose_clinic(
        &self,
        pending: PendingClinicChoice,
        clinic_id: &ClinicId,
    ) -> Result<ResolvedSession, LoginError> {
        let mut attempt = LoginAttempt::resume(pending.attempt_id);
        let span = tracing::info_span!("login", attempt_id = %attempt.id);

        if !pending.offers(clinic_id) {
            let failed_at = attempt.abort();
            span.in_scope(|| {
                tracing::warn!(
                    %clinic_id,
                    ?failed_at,
                    status = ?attempt.status,
                    "Clinic was not offered"
                )
            });
            return Err(LoginError::InvalidClinicChoice(clinic_id.clone()));
        }
        span.in_scope(|| attempt.advance(LoginStatus::SessionReady))?;

        let resolved = ResolvedSession::new(pending.token, pending.role, clinic_id.clone());
        let resolved = self
            .session
            .establish(self.store.as_ref(), resolved)
            .instrument(span.clone())
            .await?;
        span.in_scope(|| {
            tracing::info!(role = %resolved.role(), %clinic_id, "Session ready")
        });
        Ok(resolved)
    }
}
