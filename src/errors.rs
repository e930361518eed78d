//! Error taxonomy for the cache and the fetch client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure on the backing cache resource. Fatal, never retried.
    #[error("token cache storage failure: {0}")]
    Storage(#[source] std::io::Error),

    /// Persisted cache contents or a remote token body that is not valid
    /// JSON of the expected shape. The cache is left untouched.
    #[error("failed to decode token data: {0}")]
    Decode(#[source] serde_json::Error),

    /// Client constructed without a context name.
    #[error("context is not set")]
    MissingContext,

    /// Transport-level failure reaching the token endpoint.
    #[error("failed GET request: {0}")]
    Network(#[source] reqwest::Error),

    /// The session for this context is no longer valid (HTTP 401).
    #[error("not logged in to context '{context}'")]
    NotLogged { context: String },

    /// Any other non-200 response from the token endpoint.
    #[error("GET request returned status {status}")]
    UnexpectedStatus { status: String },

    /// The endpoint answered 200 but the body could not be drained.
    #[error("failed to read kubetoken response: {0}")]
    Read(#[source] reqwest::Error),
}
