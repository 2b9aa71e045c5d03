use crate::card::AgentCard;
use crate::extract::{call_error_answer, extract_answer};
use crate::transport::HttpTransport;
use crate::types::request::SendMessageRequest;
use crate::types::response::{JsonRpcResponse, TaskResult};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::{error, info};

/// Client bound to one remote agent's resolved card and shared transport.
#[derive(Debug)]
pub struct A2aClient {
    transport: Arc<HttpTransport>,
    card: AgentCard,
}

impl A2aClient {
    pub(crate) fn new(transport: Arc<HttpTransport>, card: AgentCard) -> Self {
        Self { transport, card }
    }

    /// The agent card this client was bound to at discovery time.
    pub fn card(&self) -> &AgentCard {
        &self.card
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Send one envelope and decode the task result.
    ///
    /// A single attempt, no retry. JSON-RPC errors and non-success HTTP
    /// statuses map to [`Error`]; a reply with neither result nor error is
    /// treated as an empty task result, which downstream extraction reports
    /// as content-not-found.
    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<TaskResult> {
        let raw = self.transport.post_json("/", &request.to_rpc_body()).await?;
        let reply: JsonRpcResponse = serde_json::from_value(raw)?;

        if let Some(rpc_err) = reply.error {
            return Err(Error::Remote {
                code: rpc_err.code,
                message: rpc_err.message,
            });
        }

        Ok(reply.result.unwrap_or_default())
    }

    /// Ask the remote agent a question and always get a textual answer back.
    ///
    /// This is the conversational surface: exactly one answer string per
    /// envelope sent, and no failure below discovery ever raises past here.
    /// Transport and protocol failures render as an
    /// `"Error calling A2A server: …"` string; a well-formed response with
    /// no usable content renders as the fixed no-content placeholder.
    pub async fn ask(&self, query: &str) -> String {
        let request = SendMessageRequest::from_query(query);
        info!(request_id = %request.id, "sending query to A2A agent");

        match self.send_message(&request).await {
            Ok(result) => extract_answer(&result).into_answer(),
            Err(err) => {
                error!(request_id = %request.id, error = %err, "A2A call failed");
                call_error_answer(&err)
            }
        }
    }
}
