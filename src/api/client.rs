//! HTTP client for the SIGO authentication endpoint.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::models::{Credentials, UserProfile};

use super::AuthError;

/// Path of the login endpoint, relative to the configured base URL.
const AUTH_PATH: &str = "ws/rest/auth";

/// Outbound authentication call, as seen by the session controller.
///
/// One call, one outcome: implementations do not retry, cache, or rate-limit.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<UserProfile, AuthError>;
}

/// `AuthClient` backed by reqwest.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.clone(), config.request_timeout())
    }

    fn auth_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), AUTH_PATH)
    }

    /// Strict decode of a success response body into the profile shape.
    ///
    /// A success status with an empty body is still a failed login and
    /// carries the status code like any other rejection; a malformed body
    /// or any missing required field is an invalid response.
    fn parse_success_body(
        status: reqwest::StatusCode,
        body: &str,
    ) -> Result<UserProfile, AuthError> {
        if body.trim().is_empty() {
            return Err(AuthError::from_status(status));
        }
        serde_json::from_str(body).map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserProfile, AuthError> {
        let url = self.auth_url();
        let request = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "authentication rejected");
            return Err(AuthError::from_status(status));
        }

        let body = response.text().await?;
        Self::parse_success_body(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> HttpAuthClient {
        HttpAuthClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn auth_url_joins_base_and_path() {
        assert_eq!(
            client("http://189.206.96.198:8080").auth_url(),
            "http://189.206.96.198:8080/ws/rest/auth"
        );
        // Trailing slash on the base must not double up.
        assert_eq!(
            client("http://localhost:8080/").auth_url(),
            "http://localhost:8080/ws/rest/auth"
        );
    }

    #[test]
    fn empty_success_body_fails_with_the_status_code() {
        let ok = reqwest::StatusCode::OK;
        let err = HttpAuthClient::parse_success_body(ok, "").unwrap_err();
        assert!(matches!(err, AuthError::Http(200)));

        let err = HttpAuthClient::parse_success_body(ok, "   \n").unwrap_err();
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn malformed_body_is_invalid() {
        let ok = reqwest::StatusCode::OK;
        let err =
            HttpAuthClient::parse_success_body(ok, "{\"username\": \"alice\"}").unwrap_err();
        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[test]
    fn request_body_serializes_to_expected_json() {
        let creds = Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "alice", "password": "secret"})
        );
    }
}
