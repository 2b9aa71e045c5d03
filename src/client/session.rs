use crate::client::builder::A2aClientBuilder;
use crate::client::core::A2aClient;
use crate::Result;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Owned session that amortizes the discovery handshake across calls.
///
/// The first `get_handle` call resolves the agent card and caches the
/// resulting client; every later call returns the same handle and ignores
/// its address argument. The cache is guarded by a `OnceCell`, so at most
/// one handshake runs even when first calls race. A failed handshake leaves
/// the cell empty and a later call may retry.
pub struct ClientSession {
    handle: OnceCell<Arc<A2aClient>>,
}

impl ClientSession {
    pub fn new() -> Self {
        Self {
            handle: OnceCell::new(),
        }
    }

    /// Get or create the cached client handle.
    ///
    /// `base_url` is only consulted when no handle exists yet; a session is
    /// bound to one remote address for its lifetime.
    pub async fn get_handle(&self, base_url: &str) -> Result<Arc<A2aClient>> {
        self.handle
            .get_or_try_init(|| async {
                let client = A2aClientBuilder::new().base_url(base_url).connect().await?;
                Ok(Arc::new(client))
            })
            .await
            .cloned()
    }
}

impl Default for ClientSession {
    fn default() -> Self {
        Self::new()
    }
}
