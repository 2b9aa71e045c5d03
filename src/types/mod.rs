//! # Types Module
//!
//! Wire types for the A2A protocol: role-tagged messages and parts, the
//! outgoing send envelope, and the task result shape returned by the remote
//! agent.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Role-tagged wire message with content parts |
//! | [`Part`] | One content part (text, or an opaque other kind) |
//! | [`SendMessageRequest`] | Outgoing envelope with fresh id tokens |
//! | [`TaskResult`] | Raw response result (artifacts and/or history) |
//! | [`ResponseKind`] | Closed classification of a task result's shape |

pub mod message;
pub mod request;
pub mod response;

pub use message::{Message, Part, Role};
pub use request::{MessageSendParams, SendMessageRequest};
pub use response::{Artifact, ResponseKind, TaskResult};
