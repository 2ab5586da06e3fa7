//! Remote API configuration

use serde::Deserialize;
use std::time::Duration;

use super::environment::Environment;
use super::error::ValidationError;

/// Base URLs of the auth and backend services.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Auth service base URL (login and registration)
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,

    /// Backend base URL (clinics and memberships)
    #[serde(default = "default_backend_base_url")]
    pub backend_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate API configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        check_url("auth", &self.auth_base_url, environment)?;
        check_url("backend", &self.backend_base_url, environment)?;
        Ok(())
    }
}

fn check_url(
    name: &'static str,
    url: &str,
    environment: &Environment,
) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::MissingRequired(name));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidUrl(name));
    }
    if environment.is_production() && !url.starts_with("https://") {
        return Err(ValidationError::UrlMustBeHttps(name));
    }
    Ok(())
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base_url: default_auth_base_url(),
            backend_base_url: default_backend_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_auth_base_url() -> String {
    "https://auvet-autenticacao.onrender.com/api".to_string()
}

fn default_backend_base_url() -> String {
    "https://auvet-backend.onrender.com/api".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::default();
        assert!(config.auth_base_url.starts_with("https://"));
        assert!(config.backend_base_url.ends_with("/api"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_timeout_bounds() {
        let zero = ApiConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            zero.validate(&Environment::Development),
            Err(ValidationError::InvalidTimeout)
        );

        let huge = ApiConfig {
            request_timeout_secs: 301,
            ..Default::default()
        };
        assert_eq!(
            huge.validate(&Environment::Development),
            Err(ValidationError::InvalidTimeout)
        );
    }

    #[test]
    fn test_plain_http_only_outside_production() {
        let config = ApiConfig {
            backend_base_url: "http://localhost:3000/api".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::UrlMustBeHttps("backend"))
        );
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let config = ApiConfig {
            auth_base_url: "localhost:4000".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidUrl("auth"))
        );

        let blank = ApiConfig {
            auth_base_url: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            blank.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("auth"))
        );
    }
}
