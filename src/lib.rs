//! # a2a-agent-client
//!
//! A client for the Agent-to-Agent (A2A) protocol, plus a minimal
//! conversational flow that feeds remote answers back into a role-tagged
//! message history.
//!
//! ## Overview
//!
//! The A2A protocol lets one agent call another over JSON-RPC: the remote
//! agent advertises itself through an agent card fetched from a well-known
//! path, and accepts `message/send` requests carrying role-tagged messages.
//! This crate covers the client side of that exchange:
//!
//! - **Discovery**: resolve the remote agent card once, reuse it afterwards
//! - **Request construction**: wrap a query string in a fresh send envelope
//! - **Answer extraction**: turn a raw task result into a single answer
//!   string, trying artifacts first and conversation history second
//! - **Conversation flow**: a two-node flow that appends the answer to a
//!   message history, never surfacing a transport failure as a panic
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use a2a_agent_client::ClientSession;
//!
//! #[tokio::main]
//! async fn main() -> a2a_agent_client::Result<()> {
//!     let session = ClientSession::new();
//!     let client = session.get_handle("http://localhost:10000").await?;
//!
//!     let answer = client.ask("What are the latest developments in AI?").await;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`card`] | Agent card descriptor and discovery resolver |
//! | [`client`] | A2A client, builder, and handle-caching session |
//! | [`extract`] | Answer extraction with artifact/history fallback |
//! | [`flow`] | Conversational two-node flow over chat messages |
//! | [`transport`] | Shared HTTP transport |
//! | [`types`] | Wire types: messages, envelopes, task results |

pub mod card;
pub mod client;
pub mod extract;
pub mod flow;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use card::{AgentCard, CardResolver};
pub use client::{A2aClient, A2aClientBuilder, ClientSession};
pub use extract::{extract_answer, Extracted};
pub use flow::{AgentFlow, AgentState, ChatMessage, ChatRole};
pub use types::{
    request::SendMessageRequest,
    response::{Artifact, ResponseKind, TaskResult},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
