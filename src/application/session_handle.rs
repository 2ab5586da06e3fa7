//! Process-wide session shared by the flow handlers and their readers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::session::{LoginError, ResolvedSession, Session};
use crate::ports::{SessionStore, SessionStoreError};

/// Shared handle to the current [`Session`].
///
/// Readers only ever get snapshots. The session changes through exactly two
/// paths, `establish` (login, clinic registration) and `clear` (logout), and
/// both hold the write lock while the store is updated, so no reader observes
/// the store and the session out of step.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Session {
        self.inner.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_authenticated()
    }

    /// Persists token and clinic, then publishes `resolved`.
    ///
    /// On a store failure the published session is left untouched.
    pub(crate) async fn establish(
        &self,
        store: &dyn SessionStore,
        resolved: ResolvedSession,
    ) -> Result<ResolvedSession, LoginError> {
        let mut session = self.inner.write().await;
        store
            .persist_session(resolved.token(), resolved.clinic_id())
            .await
            .map_err(|e| LoginError::Storage(e.to_string()))?;
        tracing::debug!(
            role = %resolved.role(),
            established_at = %resolved.established_at(),
            "Session published"
        );
        *session = Session::Resolved(resolved.clone());
        Ok(resolved)
    }

    /// Resets to anonymous and wipes the store.
    ///
    /// The in-memory session is reset even when the store fails.
    pub(crate) async fn clear(&self, store: &dyn SessionStore) -> Result<(), SessionStoreError> {
        let mut session = self.inner.write().await;
        *session = Session::Anonymous;
        store.clear_session().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::clinic::ClinicId;
    use crate::domain::session::{AccessToken, Role};

    fn resolved() -> ResolvedSession {
        ResolvedSession::new(
            AccessToken::new("tk"),
            Role::Staff,
            ClinicId::new("11222333000181").unwrap(),
        )
    }

    #[tokio::test]
    async fn starts_anonymous() {
        let handle = SessionHandle::new();
        assert!(!handle.is_authenticated().await);
        assert_eq!(handle.snapshot().await, Session::Anonymous);
    }

    #[tokio::test]
    async fn establish_persists_and_publishes() {
        let handle = SessionHandle::new();
        let store = InMemorySessionStore::new();

        handle.establish(&store, resolved()).await.unwrap();

        assert!(handle.is_authenticated().await);
        assert_eq!(store.token().await.unwrap(), Some(AccessToken::new("tk")));
        assert_eq!(
            store.clinic_id().await.unwrap().map(|c| c.to_string()),
            Some("11222333000181".to_string())
        );
    }

    #[tokio::test]
    async fn clones_share_the_same_session() {
        let handle = SessionHandle::new();
        let reader = handle.clone();
        let store = InMemorySessionStore::new();

        handle.establish(&store, resolved()).await.unwrap();
        assert_eq!(reader.snapshot().await.role(), Some(Role::Staff));

        handle.clear(&store).await.unwrap();
        assert!(!reader.is_authenticated().await);
        assert_eq!(store.token().await.unwrap(), None);
    }
}
