//! A2A client interface.
//!
//! Keep the public surface small: a client bound to a resolved agent card,
//! a builder that performs discovery, and a session that caches one handle
//! per process. Implementation details live in submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod session;

pub use builder::{A2aClientBuilder, DEFAULT_BASE_URL};
pub use core::A2aClient;
pub use session::ClientSession;
