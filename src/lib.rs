//! # Kubetoken Library
//!
//! Provides functionality for fetching short-lived Kubernetes auth tokens
//! from a remote issuing endpoint and caching them on disk so repeated
//! CLI invocations skip the network round trip while a token is valid.
//!
//! Modules:
//! - `config` — cache location and logging settings
//! - `cache` — persisted (context, namespace) token cache
//! - `sources` — authenticated HTTP fetch of fresh tokens
//! - `errors` — the crate-wide error taxonomy

pub mod config;
pub mod cache;
pub mod sources;
pub mod errors;
pub mod tests;
pub mod utils;

pub use crate::cache::byte_store::{ByteStore, FileByteStore};
pub use crate::cache::token_cache::KubeTokenCache;
pub use crate::errors::{Error, Result};
pub use crate::sources::kubetoken::KubeTokenClient;
