use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::byte_store::ByteStore;
use crate::cache::token::{to_tab_json, Token};
use crate::errors::{Error, Result};

/// One persisted association between a (context, namespace) key and a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    #[serde(rename = "context")]
    pub context_name: String,
    pub namespace: String,
    pub token: Token,
}

/// Write side of the cache, as seen by the fetch client.
pub trait TokenSink {
    fn set(&self, context_name: &str, namespace: &str, token: Token);
}

impl<T: TokenSink + ?Sized> TokenSink for &T {
    fn set(&self, context_name: &str, namespace: &str, token: Token) {
        (**self).set(context_name, namespace, token)
    }
}

/// Persisted token cache over a byte store.
///
/// Nothing is held in memory between operations: every call re-reads the
/// full entry list and writes it back whole, so separate CLI invocations
/// always observe the latest flush. Lookup is a linear scan; a single user
/// touches only a handful of (context, namespace) pairs.
pub struct KubeTokenCache<S: ByteStore> {
    store: S,
}

impl<S: ByteStore> KubeTokenCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read(&self) -> Result<Vec<CacheEntry>> {
        let contents = self.store.get()?;
        serde_json::from_slice(&contents).map_err(Error::Decode)
    }

    /// Looks up the token cached for (context, namespace).
    ///
    /// Returns `Ok(None)` both when nothing is cached and when the cached
    /// token has expired. The expired entry is left in place; only a later
    /// successful write to the same key replaces it.
    pub fn get(&self, context_name: &str, namespace: &str) -> Result<Option<String>> {
        let store = self.read()?;

        for entry in &store {
            if entry.context_name == context_name && entry.namespace == namespace {
                if entry.token.is_valid_at(Utc::now()) {
                    return Ok(Some(to_tab_json(&entry.token)?));
                }
                debug!(context = context_name, namespace, "cached kubetoken expired");
                return Ok(None);
            }
        }

        debug!(context = context_name, namespace, "kubetoken cache miss");
        Ok(None)
    }

    /// Upserts the token for (context, namespace): an existing entry is
    /// replaced in place keeping its position, otherwise a new entry is
    /// appended, then the whole list is persisted.
    pub fn try_set(&self, context_name: &str, namespace: &str, token: Token) -> Result<()> {
        let mut store = self.read()?;

        match store
            .iter_mut()
            .find(|e| e.context_name == context_name && e.namespace == namespace)
        {
            Some(entry) => entry.token = token,
            None => store.push(CacheEntry {
                context_name: context_name.to_owned(),
                namespace: namespace.to_owned(),
                token,
            }),
        }

        let serialized = to_tab_json(&store)?;
        self.store.set(serialized.as_bytes())
    }
}

impl<S: ByteStore> TokenSink for KubeTokenCache<S> {
    /// Best-effort write: a freshly fetched token is still returned to the
    /// caller when persisting it fails, so failures surface only as
    /// warnings.
    fn set(&self, context_name: &str, namespace: &str, token: Token) {
        if let Err(err) = self.try_set(context_name, namespace, token) {
            warn!(context = context_name, namespace, error = %err, "failed to cache kubetoken");
        }
    }
}
