use crate::card::CardResolver;
use crate::client::core::A2aClient;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Default remote agent base address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:10000";

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable. The base URL override is
/// primarily for tests against mock servers.
pub struct A2aClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl A2aClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the remote base URL. Falls back to `A2A_BASE_URL`, then to
    /// [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the transport request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Perform the discovery handshake and return a client bound to the
    /// retrieved agent card. Discovery failure propagates to the caller.
    pub async fn connect(self) -> Result<A2aClient> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("A2A_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let transport = Arc::new(match self.timeout {
            Some(timeout) => HttpTransport::with_timeout(&base_url, timeout)?,
            None => HttpTransport::new(&base_url)?,
        });

        let card = CardResolver::new(Arc::clone(&transport))
            .get_agent_card()
            .await?;

        Ok(A2aClient::new(transport, card))
    }
}

impl Default for A2aClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
