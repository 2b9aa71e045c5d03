//! Answer extraction from task results.
//!
//! A remote agent may deliver its answer as a named artifact, buried in the
//! returned conversation history, or not at all. Extraction tries the
//! strategies in a fixed priority order and reports content-not-found as a
//! normal variant rather than an error; errors are reserved for transport
//! and protocol failures upstream of this module.

use crate::types::message::Role;
use crate::types::response::{ResponseKind, TaskResult};
use tracing::debug;

/// Artifact name the remote agent uses for its finalized answer.
pub const RESULT_ARTIFACT: &str = "result";

/// Placeholder returned when a well-formed response carries no usable text.
pub const NO_CONTENT_PLACEHOLDER: &str =
    "Received response from A2A server but couldn't extract content";

/// Prefix for the textual rendering of transport and protocol failures,
/// kept distinct from [`NO_CONTENT_PLACEHOLDER`].
pub const CALL_ERROR_PREFIX: &str = "Error calling A2A server: ";

/// Outcome of extraction: either an answer string, or an explicit miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Text(String),
    NotFound,
}

impl Extracted {
    /// Collapse into the caller-facing string, applying the fixed
    /// no-content placeholder on a miss.
    pub fn into_answer(self) -> String {
        match self {
            Extracted::Text(text) => text,
            Extracted::NotFound => NO_CONTENT_PLACEHOLDER.to_string(),
        }
    }
}

/// Render a failed call as the caller-facing error string.
pub fn call_error_answer(err: &crate::Error) -> String {
    format!("{CALL_ERROR_PREFIX}{err}")
}

/// Extract a single answer from a task result.
///
/// Priority order, first hit wins:
/// 1. the first artifact named `"result"` with non-empty parts, scanned in
///    original order; a hit here never falls through to history
/// 2. the most recent assistant history message with non-empty parts,
///    scanned most-recent-first; an assistant message with empty parts is a
///    miss and the scan continues to earlier messages
///
/// In both branches a part without a text field is stringified whole.
pub fn extract_answer(result: &TaskResult) -> Extracted {
    match result.kind() {
        ResponseKind::Artifacts(artifacts) => {
            debug!(count = artifacts.len(), "scanning artifacts");
            if let Some(text) = from_artifacts(result) {
                return Extracted::Text(text);
            }
            // No artifact named "result": fall through to history.
            from_history(result)
                .map(Extracted::Text)
                .unwrap_or(Extracted::NotFound)
        }
        ResponseKind::History(history) => {
            debug!(count = history.len(), "scanning history");
            from_history(result)
                .map(Extracted::Text)
                .unwrap_or(Extracted::NotFound)
        }
        ResponseKind::Empty => Extracted::NotFound,
    }
}

fn from_artifacts(result: &TaskResult) -> Option<String> {
    result
        .artifacts()
        .iter()
        .find(|a| a.name.as_deref() == Some(RESULT_ARTIFACT) && !a.parts.is_empty())
        .map(|a| a.parts[0].display_text())
}

fn from_history(result: &TaskResult) -> Option<String> {
    result
        .history()
        .iter()
        .rev()
        .find(|m| m.role == Role::Assistant && !m.parts.is_empty())
        .map(|m| m.parts[0].display_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_from(value: serde_json::Value) -> TaskResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn result_artifact_wins_over_history() {
        let result = result_from(serde_json::json!({
            "artifacts": [
                {"name": "result", "parts": [{"kind": "text", "text": "from artifact"}]}
            ],
            "history": [
                {"role": "assistant", "parts": [{"kind": "text", "text": "from history"}]}
            ],
        }));

        assert_eq!(
            extract_answer(&result),
            Extracted::Text("from artifact".to_string())
        );
    }

    #[test]
    fn first_matching_artifact_in_original_order() {
        let result = result_from(serde_json::json!({
            "artifacts": [
                {"name": "trace", "parts": [{"kind": "text", "text": "ignored"}]},
                {"name": "result", "parts": [{"kind": "text", "text": "first"}]},
                {"name": "result", "parts": [{"kind": "text", "text": "second"}]}
            ],
        }));

        assert_eq!(extract_answer(&result), Extracted::Text("first".to_string()));
    }

    #[test]
    fn other_named_artifact_falls_through_to_history() {
        let result = result_from(serde_json::json!({
            "artifacts": [
                {"name": "other", "parts": [{"kind": "text", "text": "not the answer"}]}
            ],
            "history": [
                {"role": "assistant", "parts": [{"kind": "text", "text": "from history"}]}
            ],
        }));

        assert_eq!(
            extract_answer(&result),
            Extracted::Text("from history".to_string())
        );
    }

    #[test]
    fn result_artifact_with_empty_parts_is_skipped() {
        let result = result_from(serde_json::json!({
            "artifacts": [
                {"name": "result", "parts": []},
                {"name": "result", "parts": [{"kind": "text", "text": "later"}]}
            ],
        }));

        assert_eq!(extract_answer(&result), Extracted::Text("later".to_string()));
    }

    #[test]
    fn most_recent_assistant_message_wins() {
        let result = result_from(serde_json::json!({
            "history": [
                {"role": "user", "parts": [{"kind": "text", "text": "question"}]},
                {"role": "assistant", "parts": [{"kind": "text", "text": "A"}]},
                {"role": "assistant", "parts": [{"kind": "text", "text": "B"}]}
            ],
        }));

        assert_eq!(extract_answer(&result), Extracted::Text("B".to_string()));
    }

    #[test]
    fn assistant_with_empty_parts_is_skipped() {
        // The scan continues past an empty assistant turn to an earlier one
        // with content instead of terminating on role match.
        let result = result_from(serde_json::json!({
            "history": [
                {"role": "assistant", "parts": [{"kind": "text", "text": "earlier"}]},
                {"role": "assistant", "parts": []}
            ],
        }));

        assert_eq!(
            extract_answer(&result),
            Extracted::Text("earlier".to_string())
        );
    }

    #[test]
    fn only_empty_assistant_turns_is_a_miss() {
        let result = result_from(serde_json::json!({
            "history": [
                {"role": "user", "parts": [{"kind": "text", "text": "question"}]},
                {"role": "assistant", "parts": []}
            ],
        }));

        assert_eq!(extract_answer(&result), Extracted::NotFound);
    }

    #[test]
    fn empty_response_yields_placeholder_never_raises() {
        assert_eq!(extract_answer(&TaskResult::default()), Extracted::NotFound);
        assert_eq!(
            extract_answer(&TaskResult::default()).into_answer(),
            NO_CONTENT_PLACEHOLDER
        );

        let empty = result_from(serde_json::json!({"artifacts": [], "history": []}));
        assert_eq!(extract_answer(&empty), Extracted::NotFound);
    }

    #[test]
    fn non_text_part_is_stringified() {
        let result = result_from(serde_json::json!({
            "artifacts": [
                {"name": "result", "parts": [{"kind": "data", "data": {"answer": 42}}]}
            ],
        }));

        match extract_answer(&result) {
            Extracted::Text(text) => {
                assert!(text.contains("42"), "stringified part should carry the payload");
            }
            Extracted::NotFound => panic!("expected stringified part"),
        }
    }

    #[test]
    fn error_string_is_distinct_from_placeholder() {
        let err = crate::Error::discovery("boom");
        let rendered = call_error_answer(&err);
        assert!(rendered.starts_with(CALL_ERROR_PREFIX));
        assert_ne!(rendered, NO_CONTENT_PLACEHOLDER);
    }
}
