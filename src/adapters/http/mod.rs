//! HTTP adapters - clients for the auth and backend REST APIs.
//!
//! Each remote port has one adapter; all of them share [`ApiClient`] for
//! URL handling, bearer tokens and error extraction.

mod auth_gateway;
mod client;
mod clinic_gateway;
mod dto;
mod membership_gateway;

pub use auth_gateway::HttpAuthGateway;
pub use client::{ApiClient, Auth};
pub use clinic_gateway::HttpClinicGateway;
pub use membership_gateway::HttpMembershipGateway;

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::ports::GatewayError;

/// All HTTP adapters wired from configuration.
#[derive(Debug, Clone)]
pub struct HttpGateways {
    pub auth: Arc<HttpAuthGateway>,
    pub memberships: Arc<HttpMembershipGateway>,
    pub clinics: Arc<HttpClinicGateway>,
}

impl HttpGateways {
    pub fn from_config(config: &ApiConfig) -> Result<Self, GatewayError> {
        let timeout = config.request_timeout();
        let auth_client = ApiClient::new(&config.auth_base_url, timeout)?;
        let backend_client = ApiClient::new(&config.backend_base_url, timeout)?;

        Ok(Self {
            auth: Arc::new(HttpAuthGateway::new(auth_client)),
            memberships: Arc::new(HttpMembershipGateway::new(backend_client.clone())),
            clinics: Arc::new(HttpClinicGateway::new(backend_client)),
        })
    }
}
