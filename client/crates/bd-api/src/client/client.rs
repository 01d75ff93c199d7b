use crate::{ApiRequest, ClientError, ClientResult};

use bd_config::{ApiConfig, UnauthorizedPolicy};
use bd_storage::SessionRepository;

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the bankdash REST API
///
/// Every request reads the bearer token from durable storage at build time,
/// so a token written or cleared by anyone is picked up by the next call.
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    pub unauthorized_policy: UnauthorizedPolicy,
    sessions: SessionRepository,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client with reqwest defaults and the default 401 policy.
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    /// * `sessions` - Where the bearer token is read from
    pub fn new(base_url: &str, sessions: SessionRepository) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            unauthorized_policy: UnauthorizedPolicy::default(),
            sessions,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client honouring the configured timeout and 401 policy.
    pub fn from_config(
        api: &ApiConfig,
        unauthorized_policy: UnauthorizedPolicy,
        sessions: SessionRepository,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(api.timeout())
            .build()?;

        Ok(Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            unauthorized_policy,
            sessions,
            client,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> ClientResult<Self> {
        self.client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn with_unauthorized_policy(mut self, policy: UnauthorizedPolicy) -> Self {
        self.unauthorized_policy = policy;
        self
    }

    pub fn sessions(&self) -> &SessionRepository {
        &self.sessions
    }

    /// Build a request acting on the stored session. A 401 answer triggers
    /// the unauthorized policy.
    pub async fn request(&self, method: Method, path: &str) -> ClientResult<ApiRequest> {
        self.build(method, path, true).await
    }

    /// Build a credential-exchange request. A 401 answer is reported as an
    /// ordinary API error and the stored session is left alone.
    pub async fn credential_request(&self, method: Method, path: &str) -> ClientResult<ApiRequest> {
        self.build(method, path, false).await
    }

    async fn build(&self, method: Method, path: &str, session_bound: bool) -> ClientResult<ApiRequest> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(method, &url)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = self.sessions.access_token().await? {
            builder = builder.bearer_auth(token);
        }

        Ok(ApiRequest {
            builder,
            session_bound,
        })
    }

    /// Execute request and decode the JSON body
    pub async fn execute<T: DeserializeOwned>(&self, req: ApiRequest) -> ClientResult<T> {
        let bytes = self.send(req).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute request whose body, if any, is not needed
    pub async fn execute_empty(&self, req: ApiRequest) -> ClientResult<()> {
        self.send(req).await.map(|_| ())
    }

    async fn send(&self, req: ApiRequest) -> ClientResult<Vec<u8>> {
        let ApiRequest {
            builder,
            session_bound,
        } = req;

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::UNAUTHORIZED && session_bound {
            self.apply_unauthorized_policy().await;
            return Err(ClientError::unauthorized());
        }

        if !status.is_success() {
            return Err(Self::error_from_body(status, &body));
        }

        debug!("{} ({} bytes)", status, body.len());
        Ok(body.to_vec())
    }

    async fn apply_unauthorized_policy(&self) {
        if !self.unauthorized_policy.clears_session() {
            debug!("401 received, leaving stored session ({})", self.unauthorized_policy);
            return;
        }

        warn!("401 received, clearing stored session");
        if let Err(e) = self.sessions.clear().await {
            warn!("Failed to clear stored session after 401: {e}");
        }
    }

    /// Accepts `{ "error": { "code", "message" } }` and `{ "message" }`.
    fn error_from_body(status: StatusCode, body: &[u8]) -> ClientError {
        let fallback_message = status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();

        let Ok(value) = serde_json::from_slice::<Value>(body) else {
            return ClientError::api_error(status.as_u16(), status.as_str(), fallback_message);
        };

        let (code, message) = match value.get("error") {
            Some(error) if error.is_object() => (
                error.get("code").and_then(|v| v.as_str()),
                error.get("message").and_then(|v| v.as_str()),
            ),
            Some(error) => (None, error.as_str()),
            None => (
                value.get("code").and_then(|v| v.as_str()),
                value.get("message").and_then(|v| v.as_str()),
            ),
        };

        ClientError::api_error(
            status.as_u16(),
            code.unwrap_or(status.as_str()),
            message.map(String::from).unwrap_or(fallback_message),
        )
    }
}
