//! Mock auth gateway for testing.
//!
//! # Example
//!
//! ```ignore
//! use auvet::adapters::mock::MockAuthGateway;
//!
//! let auth = MockAuthGateway::new().with_tutor("111.444.777-35", "s3cret");
//! let grant = auth.login(&cpf, &secret).await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::clinic::ClinicId;
use crate::domain::registration::{RegisterStaffRequest, RegisterTutorRequest};
use crate::domain::session::{AccessToken, CoarseUserType, UserExtraData};
use crate::domain::tax_id::{clean, Cpf};
use crate::ports::{AuthGateway, GatewayError, LoginGrant};

#[derive(Debug, Clone)]
struct Account {
    password: String,
    grant: LoginGrant,
}

/// A staff registration as the mock received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedStaff {
    pub cpf: Cpf,
    pub job_title: String,
    pub access_level: u8,
}

/// A tutor registration as the mock received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTutor {
    pub cpf: Cpf,
    pub clinics: Vec<ClinicId>,
}

/// Mock auth gateway.
///
/// Accounts are keyed by cleaned CPF. Unknown CPFs and wrong passwords are
/// answered with a 401 rejection, like the real service.
#[derive(Debug, Default)]
pub struct MockAuthGateway {
    accounts: RwLock<HashMap<String, Account>>,
    /// Optional error to return for all calls (for error testing)
    force_error: RwLock<Option<GatewayError>>,
    login_calls: RwLock<u32>,
    staff: RwLock<Vec<RecordedStaff>>,
    tutors: RwLock<Vec<RecordedTutor>>,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account that logs in with the given grant.
    pub fn with_account(self, cpf: &str, password: &str, grant: LoginGrant) -> Self {
        self.accounts.write().unwrap().insert(
            clean(cpf),
            Account {
                password: password.to_string(),
                grant,
            },
        );
        self
    }

    /// Adds a tutor account with token `token-<cpf>`.
    pub fn with_tutor(self, cpf: &str, password: &str) -> Self {
        let grant = LoginGrant::new(test_token(cpf), CoarseUserType::Tutor);
        self.with_account(cpf, password, grant)
    }

    /// Adds a staff account with the given job title.
    pub fn with_staff(self, cpf: &str, password: &str, job_title: &str) -> Self {
        let grant = LoginGrant::new(test_token(cpf), CoarseUserType::Staff)
            .with_extra_data(UserExtraData::with_job_title(job_title));
        self.with_account(cpf, password, grant)
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(self, error: GatewayError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    pub fn login_calls(&self) -> u32 {
        *self.login_calls.read().unwrap()
    }

    pub fn registered_staff(&self) -> Vec<RecordedStaff> {
        self.staff.read().unwrap().clone()
    }

    pub fn registered_tutors(&self) -> Vec<RecordedTutor> {
        self.tutors.read().unwrap().clone()
    }

    fn forced(&self) -> Result<(), GatewayError> {
        match self.force_error.read().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Token the mock issues for `cpf`.
pub fn test_token(cpf: &str) -> AccessToken {
    AccessToken::new(format!("token-{}", clean(cpf)))
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, cpf: &Cpf, secret: &SecretString) -> Result<LoginGrant, GatewayError> {
        *self.login_calls.write().unwrap() += 1;
        self.forced()?;

        self.accounts
            .read()
            .unwrap()
            .get(cpf.as_str())
            .filter(|account| account.password == *secret.expose_secret())
            .map(|account| account.grant.clone())
            .ok_or_else(|| GatewayError::rejected(401, "Invalid credentials"))
    }

    async fn register_staff(&self, request: &RegisterStaffRequest) -> Result<(), GatewayError> {
        self.forced()?;

        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(request.cpf.as_str()) {
            return Err(GatewayError::rejected(409, "CPF already registered"));
        }
        let grant = LoginGrant::new(test_token(request.cpf.as_str()), CoarseUserType::Staff)
            .with_extra_data(UserExtraData::with_job_title(request.job_title.clone()))
            .with_display_name(request.name.clone());
        accounts.insert(
            request.cpf.as_str().to_string(),
            Account {
                password: request.secret.expose_secret().clone(),
                grant,
            },
        );

        self.staff.write().unwrap().push(RecordedStaff {
            cpf: request.cpf.clone(),
            job_title: request.job_title.clone(),
            access_level: request.access_level,
        });
        Ok(())
    }

    async fn register_tutor(&self, request: &RegisterTutorRequest) -> Result<(), GatewayError> {
        self.forced()?;
        self.tutors.write().unwrap().push(RecordedTutor {
            cpf: request.cpf.clone(),
            clinics: request.clinics.clone(),
        });
        Ok(())
    }
}
