//! Outgoing send envelope construction.

use crate::types::message::Message;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parameters of a `message/send` call: the single message to deliver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSendParams {
    pub message: Message,
}

/// Outgoing request envelope.
///
/// Each envelope carries two independent fresh tokens: the top-level request
/// `id` and the inner `message_id`. Envelopes are built per call and never
/// reused or mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub id: String,
    pub params: MessageSendParams,
}

impl SendMessageRequest {
    /// Wrap a query string as a single user text part with fresh id tokens.
    ///
    /// No validation is performed on the query; construction is pure and
    /// deterministic apart from the generated tokens.
    pub fn from_query(query: impl Into<String>) -> Self {
        let message =
            Message::user(query).with_message_id(Uuid::new_v4().simple().to_string());
        Self {
            id: Uuid::new_v4().to_string(),
            params: MessageSendParams { message },
        }
    }

    /// Frame this envelope as a JSON-RPC 2.0 `message/send` call body.
    pub fn to_rpc_body(&self) -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": self.id,
            "method": "message/send",
            "params": self.params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::message::Role;

    #[test]
    fn fresh_tokens_per_envelope() {
        let a = SendMessageRequest::from_query("same query");
        let b = SendMessageRequest::from_query("same query");

        assert_ne!(a.id, b.id);
        assert_ne!(
            a.params.message.message_id, b.params.message.message_id,
            "message ids must be independently generated"
        );
        assert_eq!(
            a.params.message.parts[0].as_text(),
            b.params.message.parts[0].as_text()
        );
    }

    #[test]
    fn envelope_wire_shape() {
        let req = SendMessageRequest::from_query("hello");
        let body = req.to_rpc_body();

        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["method"], "message/send");
        assert_eq!(body["params"]["message"]["role"], "user");
        assert_eq!(body["params"]["message"]["parts"][0]["kind"], "text");
        assert_eq!(body["params"]["message"]["parts"][0]["text"], "hello");
        assert!(body["params"]["message"]["message_id"].is_string());
    }

    #[test]
    fn role_is_user() {
        let req = SendMessageRequest::from_query("q");
        assert_eq!(req.params.message.role, Role::User);
    }
}
