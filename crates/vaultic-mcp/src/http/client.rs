/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for backend calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing bearer selection
*/

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::auth::SessionStore;
use crate::http::{Result, VaulticError};

/// Base URL for the Vaultic backend API
const API_BASE_URL: &str = "https://api.vaultic.io";

/// Environment overrides read by `from_env`
const ENV_API_URL: &str = "VAULTIC_API_URL";
const ENV_API_KEY: &str = "VAULTIC_API_KEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Main HTTP client for the Vaultic backend.
///
/// Every request carries a bearer credential: the live session token
/// when one is held, otherwise the statically configured API key, if
/// any. Cloning is cheap; clones share the underlying connection pool
/// and session slot.
#[derive(Debug, Clone)]
pub struct VaulticClient {
    http_client: Client,
    base_url: Url,
    api_key: Option<String>,
    session: SessionStore,
    timeout: Duration,
}

impl VaulticClient {
    /// Create a new client with default configuration
    pub fn new(session: SessionStore) -> Result<Self> {
        Self::with_config(ClientConfig::default(), session)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, session: SessionStore) -> Result<Self> {
        Self::with_config_and_base_url(config, API_BASE_URL, session)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        session: SessionStore,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            api_key: None,
            session,
            timeout: config.timeout,
        })
    }

    /// Create a client from the process environment.
    ///
    /// `VAULTIC_API_URL` overrides the base URL; `VAULTIC_API_KEY`
    /// installs the static fallback credential used before a session
    /// token exists.
    pub fn from_env(session: SessionStore) -> Result<Self> {
        let base_url =
            std::env::var(ENV_API_URL).unwrap_or_else(|_| API_BASE_URL.to_string());
        let mut client =
            Self::with_config_and_base_url(ClientConfig::default(), &base_url, session)?;
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                client.set_api_key(key);
            }
        }
        Ok(client)
    }

    /// Set the static API key used as the fallback bearer credential
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Get the session store shared with this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, endpoint: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(endpoint)
    }

    /// Build a request with the current bearer credential attached
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        let mut builder = self.http_client.request(method, url);
        if let Some(bearer) = self.session.bearer().or_else(|| self.api_key.clone()) {
            builder = builder.bearer_auth(bearer);
        }
        Ok(builder)
    }

    /// Send a request and decode the JSON response body.
    ///
    /// Maps 404 onto `NotFound`, other non-success statuses onto `Api`
    /// with the backend message preserved, and request timeouts onto
    /// `Timeout`. No retries are performed.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                VaulticError::Timeout {
                    duration: self.timeout.as_secs(),
                }
            } else {
                VaulticError::Http(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let message = error_message(response).await;
            return Err(VaulticError::NotFound(message));
        }
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(VaulticError::api_error(status, message));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            VaulticError::InvalidResponse(format!("failed to decode response body: {e}"))
        })
    }
}

/// Extract a human-readable message from an error response.
///
/// Prefers a `message` or `error` field from a JSON body, then the raw
/// body text, then the status canonical reason.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        for field in ["message", "error"] {
            if let Some(message) = value.get(field).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    if text.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        text
    }
}
