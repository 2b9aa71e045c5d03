//! Task result shapes returned by the remote agent.

use crate::types::message::{Message, Part};
use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 reply envelope for a `message/send` call.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<TaskResult>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Raw result of a send call. The remote agent decides which of the
/// optional sequences it fills in; neither is guaranteed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<serde_json::Value>,
}

impl TaskResult {
    pub fn artifacts(&self) -> &[Artifact] {
        self.artifacts.as_deref().unwrap_or_default()
    }

    pub fn history(&self) -> &[Message] {
        self.history.as_deref().unwrap_or_default()
    }

    /// Classify the result's shape once, so downstream logic branches over
    /// a closed set instead of probing field presence.
    pub fn kind(&self) -> ResponseKind<'_> {
        if !self.artifacts().is_empty() {
            ResponseKind::Artifacts(self.artifacts())
        } else if !self.history().is_empty() {
            ResponseKind::History(self.history())
        } else {
            ResponseKind::Empty
        }
    }
}

/// A named content block representing a finalized result, distinct from
/// conversational history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Closed classification of a task result: artifacts dominate when present.
#[derive(Debug)]
pub enum ResponseKind<'a> {
    Artifacts(&'a [Artifact]),
    History(&'a [Message]),
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_prefers_artifacts() {
        let result: TaskResult = serde_json::from_value(serde_json::json!({
            "artifacts": [{"name": "result", "parts": [{"kind": "text", "text": "A"}]}],
            "history": [{"role": "assistant", "parts": [{"kind": "text", "text": "B"}]}],
        }))
        .unwrap();

        assert!(matches!(result.kind(), ResponseKind::Artifacts(_)));
    }

    #[test]
    fn kind_empty_when_sequences_absent_or_empty() {
        let absent = TaskResult::default();
        assert!(matches!(absent.kind(), ResponseKind::Empty));

        let empty: TaskResult =
            serde_json::from_value(serde_json::json!({"artifacts": [], "history": []})).unwrap();
        assert!(matches!(empty.kind(), ResponseKind::Empty));
    }

    #[test]
    fn rpc_error_envelope_decodes() {
        let reply: JsonRpcResponse = serde_json::from_value(serde_json::json!({
            "jsonrpc": "2.0",
            "id": "1",
            "error": {"code": -32600, "message": "invalid request"},
        }))
        .unwrap();

        assert!(reply.result.is_none());
        assert_eq!(reply.error.unwrap().code, -32600);
    }
}
