//! File-backed Session Store Adapter
//!
//! The active clinic survives restarts: it is written as a small JSON file.
//! The bearer token is never written to disk and lives only in memory, so a
//! restarted process starts logged out but remembers the last clinic.
//!
//! Every operation goes through one lock, which keeps `persist_session`
//! and `clear_session` atomic for readers of this store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::clinic::ClinicId;
use crate::domain::session::AccessToken;
use crate::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredClinic {
    clinic_id: ClinicId,
}

/// File-based session store
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    token: RwLock<Option<AccessToken>>,
}

impl FileSessionStore {
    /// Create a store that keeps the active clinic in `path`.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new(".auvet/session.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            token: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_clinic(&self, clinic_id: &ClinicId) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
            }
        }

        let json = serde_json::to_vec(&StoredClinic {
            clinic_id: clinic_id.clone(),
        })
        .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }

    async fn read_clinic(&self) -> Result<Option<ClinicId>, SessionStoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::IoError(e.to_string())),
        };

        let stored: StoredClinic = serde_json::from_slice(&bytes)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;
        Ok(Some(stored.clinic_id))
    }

    async fn remove_clinic(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::IoError(e.to_string())),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn persist_token(&self, token: &AccessToken) -> Result<(), SessionStoreError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn token(&self) -> Result<Option<AccessToken>, SessionStoreError> {
        Ok(self.token.read().await.clone())
    }

    async fn clear_token(&self) -> Result<(), SessionStoreError> {
        *self.token.write().await = None;
        Ok(())
    }

    async fn persist_clinic_id(&self, clinic_id: &ClinicId) -> Result<(), SessionStoreError> {
        let _guard = self.token.write().await;
        self.write_clinic(clinic_id).await
    }

    async fn clinic_id(&self) -> Result<Option<ClinicId>, SessionStoreError> {
        let _guard = self.token.read().await;
        self.read_clinic().await
    }

    async fn clear_clinic_id(&self) -> Result<(), SessionStoreError> {
        let _guard = self.token.write().await;
        self.remove_clinic().await
    }

    async fn persist_session(
        &self,
        token: &AccessToken,
        clinic_id: &ClinicId,
    ) -> Result<(), SessionStoreError> {
        let mut guard = self.token.write().await;
        self.write_clinic(clinic_id).await?;
        *guard = Some(token.clone());
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), SessionStoreError> {
        let mut guard = self.token.write().await;
        *guard = None;
        self.remove_clinic().await
    }
}
