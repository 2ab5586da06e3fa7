//! Local session storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the active clinic is remembered between runs.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_clinic_file")]
    pub clinic_file: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.clinic_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.clinic_file"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            clinic_file: default_clinic_file(),
        }
    }
}

fn default_clinic_file() -> PathBuf {
    PathBuf::from(".auvet/session.json")
}
