//! Session Store Port - where the bearer token and active clinic live.
//!
//! The store is a plain key-value holder with no validation of its own.
//! Writers are the login, logout and registration handlers; API adapters
//! read the token to authenticate their calls.

use async_trait::async_trait;

use crate::domain::clinic::ClinicId;
use crate::domain::session::AccessToken;

/// Errors that can occur during session store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Stored session is corrupt: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn persist_token(&self, token: &AccessToken) -> Result<(), SessionStoreError>;

    async fn token(&self) -> Result<Option<AccessToken>, SessionStoreError>;

    async fn clear_token(&self) -> Result<(), SessionStoreError>;

    async fn persist_clinic_id(&self, clinic_id: &ClinicId) -> Result<(), SessionStoreError>;

    async fn clinic_id(&self) -> Result<Option<ClinicId>, SessionStoreError>;

    async fn clear_clinic_id(&self) -> Result<(), SessionStoreError>;

    /// Stores token and clinic as one unit.
    ///
    /// The default writes the clinic first so a failure never leaves a
    /// token without a clinic. Adapters that can do better (one lock, one
    /// write) should override it.
    async fn persist_session(
        &self,
        token: &AccessToken,
        clinic_id: &ClinicId,
    ) -> Result<(), SessionStoreError> {
        self.persist_clinic_id(clinic_id).await?;
        if let Err(err) = self.persist_token(token).await {
            self.clear_clinic_id().await.ok();
            return Err(err);
        }
        Ok(())
    }

    /// Removes token and clinic.
    async fn clear_session(&self) -> Result<(), SessionStoreError> {
        self.clear_token().await?;
        self.clear_clinic_id().await
    }
}
