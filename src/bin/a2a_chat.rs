//! a2a-chat — exercise a local A2A server through the conversational flow.
//!
//! Usage:
//!   a2a-chat [query ...]       Send each query through the two-node flow
//!
//! With no arguments a fixed set of sample queries is used. The remote base
//! address comes from A2A_BASE_URL (default http://localhost:10000); start
//! the A2A server first.

use a2a_agent_client::client::DEFAULT_BASE_URL;
use a2a_agent_client::flow::{AgentFlow, AgentState, ChatMessage};
use a2a_agent_client::ClientSession;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const SAMPLE_QUERIES: &[&str] = &[
    "What are the latest developments in artificial intelligence?",
    "Find me recent papers on transformer architectures",
    "What do the policy documents say about student loans?",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let base_url =
        std::env::var("A2A_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let queries: Vec<String> = if args.is_empty() {
        SAMPLE_QUERIES.iter().map(|q| q.to_string()).collect()
    } else {
        args
    };

    let session = Arc::new(ClientSession::new());
    let flow = AgentFlow::new(Arc::clone(&session), &base_url);

    // Discovery runs on the first query and is fatal if the server is down.
    let handle = session.get_handle(&base_url).await?;
    println!("Connected to agent: {}", handle.card().name);

    for (i, query) in queries.iter().enumerate() {
        println!("\n[{}] {query}", i + 1);

        let state = flow.run(AgentState::from_query(query)).await?;
        match state.last() {
            Some(ChatMessage { content, .. }) => println!("    {content}"),
            None => println!("    (no response)"),
        }
    }

    Ok(())
}
