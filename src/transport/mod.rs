//! Shared HTTP transport for discovery and JSON-RPC calls.

mod http;

pub use http::{HttpTransport, TransportError, DEFAULT_TIMEOUT_SECS};
