//! Agent card discovery.
//!
//! A2A servers advertise themselves through an agent card served from a
//! well-known path. The card is fetched once per session and the client is
//! bound to it afterwards.

use crate::transport::HttpTransport;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Well-known discovery path, per the A2A specification.
pub const AGENT_CARD_PATH: &str = "/.well-known/agent.json";

/// Descriptor advertising a remote agent's capabilities and endpoint.
///
/// Servers are free to extend the card; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub capabilities: Option<serde_json::Value>,
    #[serde(default)]
    pub skills: Vec<AgentSkill>,
    #[serde(default)]
    pub default_input_modes: Vec<String>,
    #[serde(default)]
    pub default_output_modes: Vec<String>,
}

/// One advertised skill on an agent card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Resolves an agent card from a remote base URL.
pub struct CardResolver {
    transport: Arc<HttpTransport>,
}

impl CardResolver {
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch and decode the remote agent card.
    ///
    /// Failure here is fatal to client construction: there is no degraded
    /// mode without a card, so the error propagates uncaught.
    pub async fn get_agent_card(&self) -> Result<AgentCard> {
        let raw = self
            .transport
            .get_json(AGENT_CARD_PATH)
            .await
            .map_err(|e| crate::Error::discovery(e.to_string()))?;

        let card: AgentCard = serde_json::from_value(raw)
            .map_err(|e| crate::Error::discovery(format!("malformed agent card: {e}")))?;

        info!(agent = %card.name, "retrieved agent card");
        Ok(card)
    }
}
