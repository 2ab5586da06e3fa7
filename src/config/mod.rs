//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AUVET` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use auvet::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Auth API at {}", config.api.auth_base_url);
//! ```

mod api;
mod environment;
mod error;
mod storage;

pub use api::ApiConfig;
pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration pointed at the production services.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Remote services (auth and backend)
    #[serde(default)]
    pub api: ApiConfig,

    /// Local session storage
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AUVET` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AUVET__API__AUTH_BASE_URL=...` -> `api.auth_base_url = ...`
    /// - `AUVET__STORAGE__CLINIC_FILE=...` -> `storage.clinic_file = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AUVET")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate(&self.environment)?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info,auvet=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("AUVET__ENVIRONMENT");
        env::remove_var("AUVET__LOG_LEVEL");
        env::remove_var("AUVET__API__AUTH_BASE_URL");
        env::remove_var("AUVET__API__BACKEND_BASE_URL");
        env::remove_var("AUVET__API__REQUEST_TIMEOUT_SECS");
        env::remove_var("AUVET__STORAGE__CLINIC_FILE");
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(
            config.api.auth_base_url,
            "https://auvet-autenticacao.onrender.com/api"
        );
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.storage.clinic_file, PathBuf::from(".auvet/session.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUVET__API__BACKEND_BASE_URL", "http://localhost:3000/api");
        env::set_var("AUVET__API__REQUEST_TIMEOUT_SECS", "5");
        env::set_var("AUVET__STORAGE__CLINIC_FILE", "/tmp/auvet.json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.backend_base_url, "http://localhost:3000/api");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.storage.clinic_file, PathBuf::from("/tmp/auvet.json"));
    }

    #[test]
    fn test_production_requires_https() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUVET__ENVIRONMENT", "production");
        env::set_var("AUVET__API__AUTH_BASE_URL", "http://auth.internal/api");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::UrlMustBeHttps("auth"))
        );
    }
}
