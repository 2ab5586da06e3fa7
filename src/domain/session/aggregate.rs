//! Session value - what the rest of the client sees after login.
//!
//! # Invariants
//!
//! - A session is either `Anonymous` or fully `Resolved`
//! - A resolved session always carries token, role and clinic together
//! - The clinic-choice step of a login never produces a `Session`

use crate::domain::clinic::ClinicId;
use crate::domain::foundation::Timestamp;

use super::{AccessToken, Role};

/// Token, role and active clinic of a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    token: AccessToken,
    role: Role,
    clinic_id: ClinicId,
    established_at: Timestamp,
}

impl ResolvedSession {
    pub fn new(token: AccessToken, role: Role, clinic_id: ClinicId) -> Self {
        Self {
            token,
            role,
            clinic_id,
            established_at: Timestamp::now(),
        }
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn clinic_id(&self) -> &ClinicId {
        &self.clinic_id
    }

    pub fn established_at(&self) -> &Timestamp {
        &self.established_at
    }
}

/// Externally observed session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Resolved(ResolvedSession),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&ResolvedSession> {
        match self {
            Session::Resolved(resolved) => Some(resolved),
            Session::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.resolved().map(ResolvedSession::token)
    }

    pub fn role(&self) -> Option<Role> {
        self.resolved().map(ResolvedSession::role)
    }

    pub fn clinic_id(&self) -> Option<&ClinicId> {
        self.resolved().map(ResolvedSession::clinic_id)
    }
}

impl From<ResolvedSession> for Session {
    fn from(resolved: ResolvedSession) -> Self {
        Session::Resolved(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> ResolvedSession {
        ResolvedSession::new(
            AccessToken::new("tk"),
            Role::Tutor,
            ClinicId::new("11222333000181").unwrap(),
        )
    }

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.role().is_none());
        assert!(session.clinic_id().is_none());
    }

    #[test]
    fn resolved_session_exposes_all_three_parts() {
        let session = Session::from(resolved());
        assert!(session.is_authenticated());
        assert_eq!(session.token().map(AccessToken::expose), Some("tk"));
        assert_eq!(session.role(), Some(Role::Tutor));
        assert_eq!(
            session.clinic_id().map(ClinicId::as_str),
            Some("11222333000181")
        );
    }

    #[test]
    fn established_at_is_set_on_creation() {
        let before = Timestamp::now();
        let session = resolved();
        assert!(*session.established_at() >= before);
    }
}
