//! User roles and the classification rule that produces them.
//!
//! The auth service only reports a coarse user type. Administrators are
//! staff members whose job title is "Administrador", so the concrete role
//! is derived once, right after authentication, and everything downstream
//! branches on [`Role`] rather than on raw strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::LoginError;

/// Job title that promotes a staff member to administrator.
pub const ADMIN_JOB_TITLE: &str = "administrador";

/// User type as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoarseUserType {
    /// `funcionario` on the wire.
    Staff,
    Tutor,
    /// Anything the client does not recognise, kept verbatim.
    Other(String),
}

impl CoarseUserType {
    /// Parses the wire value, ignoring case.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "funcionario" => CoarseUserType::Staff,
            "tutor" => CoarseUserType::Tutor,
            _ => CoarseUserType::Other(raw.to_string()),
        }
    }
}

/// Free-form profile data returned with a login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserExtraData {
    pub job_title: Option<String>,
}

impl UserExtraData {
    pub fn with_job_title(job_title: impl Into<String>) -> Self {
        Self {
            job_title: Some(job_title.into()),
        }
    }
}

/// Which membership directory holds a role's clinic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipKind {
    Staff,
    Tutor,
}

/// Resolved role of a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(rename = "funcionario")]
    Staff,
    Tutor,
}

impl Role {
    /// Resolves the concrete role from the auth service's answer.
    ///
    /// # Errors
    ///
    /// `LoginError::UnknownUserType` when the coarse type is neither staff
    /// nor tutor. There is no default role.
    pub fn classify(
        user_type: &CoarseUserType,
        extra: Option<&UserExtraData>,
    ) -> Result<Role, LoginError> {
        match user_type {
            CoarseUserType::Tutor => Ok(Role::Tutor),
            CoarseUserType::Staff => {
                let is_admin = extra
                    .and_then(|e| e.job_title.as_deref())
                    .is_some_and(|title| title.eq_ignore_ascii_case(ADMIN_JOB_TITLE));
                Ok(if is_admin { Role::Admin } else { Role::Staff })
            }
            CoarseUserType::Other(raw) => Err(LoginError::UnknownUserType(raw.clone())),
        }
    }

    /// Admins are staff for membership purposes.
    pub fn membership_kind(&self) -> MembershipKind {
        match self {
            Role::Admin | Role::Staff => MembershipKind::Staff,
            Role::Tutor => MembershipKind::Tutor,
        }
    }

    /// Landing page for the role once the session is ready.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/dashboard/admin",
            Role::Staff => "/dashboard/funcionario",
            Role::Tutor => "/dashboard/tutor",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "funcionario",
            Role::Tutor => "tutor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
