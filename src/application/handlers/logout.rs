//! LogoutHandler - ends the current session.

use std::sync::Arc;

use crate::application::SessionHandle;
use crate::ports::{SessionStore, SessionStoreError};

pub struct LogoutHandler {
    store: Arc<dyn SessionStore>,
    session: SessionHandle,
}

impl LogoutHandler {
    pub fn new(store: Arc<dyn SessionStore>, session: SessionHandle) -> Self {
        Self { store, session }
    }

    /// Resets the session to anonymous and wipes token and clinic.
    ///
    /// Logging out while anonymous is a no-op that still clears the store.
    pub async fn handle(&self) -> Result<(), SessionStoreError> {
        let was_authenticated = self.session.is_authenticated().await;
        self.session.clear(self.store.as_ref()).await?;
        tracing::info!(was_authenticated, "Logged out");
        Ok(())
    }
}
