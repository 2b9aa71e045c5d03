use crate::Result;
use serde::Serialize;
use std::env;
use std::time::Duration;

/// Default request timeout in seconds, matching the upstream agent's
/// expectation of long-running tool calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Shared HTTP transport bound to one remote base URL.
///
/// One `reqwest::Client` is created per transport and reused for both the
/// discovery GET and every subsequent RPC POST, so connection pooling is
/// amortized across the session.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(default_timeout_secs()))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON document from `path` (discovery).
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        Self::decode(response).await
    }

    /// POST a JSON body to `path` and decode the JSON reply (RPC).
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(crate::Error::Transport(TransportError::Status {
                code: status.as_u16(),
                body,
            }));
        }

        response
            .json()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))
    }
}

fn default_timeout_secs() -> u64 {
    // Env-overridable so test harnesses can shorten the wait.
    env::var("A2A_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Transport error: {0}")]
    Other(String),
}
