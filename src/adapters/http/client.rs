//! Shared JSON client for the auth and backend APIs.
//!
//! Handles the conventions both services share:
//!
//! - base URL without trailing slash, paths with or without a leading one
//! - JSON request and response bodies
//! - `Authorization: Bearer <token>` on authenticated calls
//! - non-2xx answers turned into `GatewayError::Rejected`, using the body's
//!   `message`, then `error`, then `HTTP <status>` as the message

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::session::AccessToken;
use crate::ports::GatewayError;

/// Which bearer token, if any, a call carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth<'a> {
    Anonymous,
    Token(&'a AccessToken),
}

/// Error body shape used by both services.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// JSON API client bound to one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    timeout: Duration,
}

impl ApiClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and a path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET a JSON document.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth<'_>,
    ) -> Result<T, GatewayError> {
        let response = self.send::<()>(Method::GET, path, None, auth).await?;
        decode(response).await
    }

    /// POST a JSON body and decode the JSON answer.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        auth: Auth<'_>,
    ) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body), auth).await?;
        decode(response).await
    }

    /// POST a JSON body when only success matters.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Auth<'_>,
    ) -> Result<(), GatewayError> {
        self.send(Method::POST, path, Some(body), auth).await?;
        Ok(())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth<'_>,
    ) -> Result<Response, GatewayError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, ?auth, "Sending API request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        match auth {
            Auth::Anonymous => {}
            Auth::Token(token) => request = request.bearer_auth(token.expose()),
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(%url, "API request failed: {}", e);
            if e.is_timeout() {
                GatewayError::transport(format!(
                    "Request timed out after {}s",
                    self.timeout.as_secs()
                ))
            } else if e.is_connect() {
                GatewayError::transport(format!("Connection failed: {}", e))
            } else {
                GatewayError::transport(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = error_message(response).await;
        tracing::warn!(%url, status = status.as_u16(), %message, "API request rejected");
        Err(GatewayError::rejected(status.as_u16(), message))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    if response.status() == StatusCode::NO_CONTENT {
        return Err(GatewayError::decode("expected a JSON body, got 204 No Content"));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::decode(e.to_string()))
}

async fn error_message(response: Response) -> String {
    let fallback = format!("HTTP {}", response.status().as_u16());
    match response.json::<ErrorBody>().await {
        Ok(body) => pick_message(body).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn pick_message(body: ErrorBody) -> Option<String> {
    body.message
        .filter(|m| !m.is_empty())
        .or(body.error.filter(|e| !e.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(client("https://api.example.com/api/").base_url(), "https://api.example.com/api");
    }

    #[test]
    fn url_accepts_paths_with_or_without_leading_slash() {
        let c = client("https://api.example.com/api");
        assert_eq!(c.url("/auth/login"), "https://api.example.com/api/auth/login");
        assert_eq!(c.url("auth/login"), "https://api.example.com/api/auth/login");
    }

    #[test]
    fn message_wins_over_error() {
        let body = ErrorBody {
            message: Some("CPF já cadastrado".to_string()),
            error: Some("Conflict".to_string()),
        };
        assert_eq!(pick_message(body).as_deref(), Some("CPF já cadastrado"));
    }

    #[test]
    fn empty_message_falls_back_to_error() {
        let body = ErrorBody {
            message: Some(String::new()),
            error: Some("Unauthorized".to_string()),
        };
        assert_eq!(pick_message(body).as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn no_fields_gives_none() {
        let body = ErrorBody {
            message: None,
            error: None,
        };
        assert_eq!(pick_message(body), None);
    }
}
