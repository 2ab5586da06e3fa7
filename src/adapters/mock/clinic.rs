//! Recording clinic gateway for tests.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::registration::CreateClinicRequest;
use crate::domain::session::AccessToken;
use crate::ports::{ClinicGateway, GatewayError};

#[derive(Debug, Default)]
pub struct MockClinicGateway {
    created: RwLock<Vec<CreateClinicRequest>>,
    tokens: RwLock<Vec<AccessToken>>,
    /// Optional error to return for all calls (for error testing)
    force_error: RwLock<Option<GatewayError>>,
}

impl MockClinicGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(self, error: GatewayError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    pub fn created(&self) -> Vec<CreateClinicRequest> {
        self.created.read().unwrap().clone()
    }

    /// Bearer tokens the creation calls carried, in call order.
    pub fn tokens(&self) -> Vec<AccessToken> {
        self.tokens.read().unwrap().clone()
    }
}

#[async_trait]
impl ClinicGateway for MockClinicGateway {
    async fn create_clinic(
        &self,
        request: &CreateClinicRequest,
        token: &AccessToken,
    ) -> Result<(), GatewayError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }
        self.created.write().unwrap().push(request.clone());
        self.tokens.write().unwrap().push(token.clone());
        Ok(())
    }
}
