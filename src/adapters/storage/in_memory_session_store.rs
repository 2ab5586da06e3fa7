//! In-Memory Session Store Adapter
//!
//! Keeps token and clinic id behind a single lock, so `persist_session`
//! and `clear_session` are atomic for every reader.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::clinic::ClinicId;
use crate::domain::session::AccessToken;
use crate::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Default)]
struct Stored {
    token: Option<AccessToken>,
    clinic_id: Option<ClinicId>,
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    state: Arc<RwLock<Stored>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn persist_token(&self, token: &AccessToken) -> Result<(), SessionStoreError> {
        self.state.write().await.token = Some(token.clone());
        Ok(())
    }

    async fn token(&self) -> Result<Option<AccessToken>, SessionStoreError> {
        Ok(self.state.read().await.token.clone())
    }

    async fn clear_token(&self) -> Result<(), SessionStoreError> {
        self.state.write().await.token = None;
        Ok(())
    }

    async fn persist_clinic_id(&self, clinic_id: &ClinicId) -> Result<(), SessionStoreError> {
        self.state.write().await.clinic_id = Some(clinic_id.clone());
        Ok(())
    }

    async fn clinic_id(&self) -> Result<Option<ClinicId>, SessionStoreError> {
        Ok(self.state.read().await.clinic_id.clone())
    }

    async fn clear_clinic_id(&self) -> Result<(), SessionStoreError> {
        self.state.write().await.clinic_id = None;
        Ok(())
    }

    async fn persist_session(
        &self,
        token: &AccessToken,
        clinic_id: &ClinicId,
    ) -> Result<(), SessionStoreError> {
        let mut state = self.state.write().await;
        state.token = Some(token.clone());
        state.clinic_id = Some(clinic_id.clone());
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), SessionStoreError> {
        let mut state = self.state.write().await;
        state.token = None;
        state.clinic_id = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.token().await.unwrap(), None);
        assert_eq!(store.clinic_id().await.unwrap(), None);
    }

    #[tokio::test]
    async fn token_and_clinic_are_independent_keys() {
        let store = InMemorySessionStore::new();
        store.persist_token(&AccessToken::new("tk")).await.unwrap();
        assert_eq!(store.token().await.unwrap(), Some(AccessToken::new("tk")));
        assert_eq!(store.clinic_id().await.unwrap(), None);

        store.clear_token().await.unwrap();
        assert_eq!(store.token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemorySessionStore::new();
        let reader = store.clone();
        let clinic = ClinicId::new("c-9").unwrap();

        store
            .persist_session(&AccessToken::new("tk"), &clinic)
            .await
            .unwrap();
        assert_eq!(reader.clinic_id().await.unwrap(), Some(clinic));

        store.clear_session().await.unwrap();
        assert_eq!(reader.token().await.unwrap(), None);
        assert_eq!(reader.clinic_id().await.unwrap(), None);
    }
}
