use crate::transport::TransportError;
use thiserror::Error;

/// Unified error type for the A2A client.
///
/// This aggregates the low-level failures into the categories the caller
/// actually branches on: discovery is fatal and propagates, everything else
/// is normalized into a textual turn at the `ask` boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Agent card discovery failed. Surfaced uncaught to the caller: a
    /// client without a card is a startup failure, not a conversational one.
    #[error("Agent discovery error: {message}")]
    Discovery { message: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// JSON-RPC level error returned by the remote agent.
    #[error("Remote error: code {code}: {message}")]
    Remote { code: i64, message: String },
}

impl Error {
    pub fn discovery(message: impl Into<String>) -> Self {
        Error::Discovery {
            message: message.into(),
        }
    }
}
