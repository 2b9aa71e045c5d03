//! Role-tagged wire messages and their content parts.

use serde::{Deserialize, Serialize};

/// A role-tagged message as it appears on the wire, both in outgoing send
/// envelopes and in the `history` sequence of a task result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::text(text)],
            message_id: None,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            parts: vec![Part::text(text)],
            message_id: None,
        }
    }

    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }
}

/// Message role.
///
/// Remote agents are free to introduce roles this client does not know
/// about; those decode to [`Role::Other`] rather than failing the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    Agent,
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Agent => "agent",
            Role::Other => "other",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "agent" => Role::Agent,
            _ => Role::Other,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// One content part of a message or artifact.
///
/// The client only ever produces text parts (`kind: "text"`), but responses
/// may carry other kinds; those are kept as raw JSON so they can still be
/// rendered with [`Part::display_text`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        #[serde(default = "text_kind")]
        kind: String,
        text: String,
    },
    Other(serde_json::Value),
}

fn text_kind() -> String {
    "text".to_string()
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text {
            kind: text_kind(),
            text: text.into(),
        }
    }

    /// The text field, if this part exposes one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text, .. } => Some(text),
            Part::Other(_) => None,
        }
    }

    /// The text field, or a string conversion of the whole part.
    pub fn display_text(&self) -> String {
        match self {
            Part::Text { text, .. } => text.clone(),
            Part::Other(value) => value.to_string(),
        }
    }
}
