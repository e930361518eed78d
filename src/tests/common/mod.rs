use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::cache::byte_store::ByteStore;
use crate::cache::token::Token;
use crate::errors::Result;

/// In-memory byte store so cache logic runs without a filesystem.
/// Mirrors the file store's lazy bootstrap: reading unset contents yields
/// the empty store.
#[derive(Default)]
pub struct MemoryByteStore {
    contents: Mutex<Option<Vec<u8>>>,
}

impl MemoryByteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &[u8]) -> Self {
        Self {
            contents: Mutex::new(Some(contents.to_vec())),
        }
    }

    /// Raw backing bytes, `None` if the store was never touched.
    pub fn raw(&self) -> Option<Vec<u8>> {
        self.contents.lock().unwrap().clone()
    }
}

impl ByteStore for MemoryByteStore {
    fn get(&self) -> Result<Vec<u8>> {
        let mut guard = self.contents.lock().unwrap();
        Ok(guard.get_or_insert_with(|| b"[]".to_vec()).clone())
    }

    fn set(&self, value: &[u8]) -> Result<()> {
        *self.contents.lock().unwrap() = Some(value.to_vec());
        Ok(())
    }
}

/// Token fixture shaped like a TokenRequest response, expiring at the
/// given instant.
pub fn token_expiring_at(expiration: DateTime<Utc>) -> Token {
    serde_json::from_value(json!({
        "kind": "TokenRequest",
        "apiVersion": "authentication.k8s.io/v1",
        "spec": { "audiences": ["kubernetes"] },
        "status": {
            "token": "a.jwt.token",
            "expirationTimestamp": expiration.to_rfc3339(),
        }
    }))
    .expect("valid token fixture")
}

pub fn token_valid_for(hours: i64) -> Token {
    token_expiring_at(Utc::now() + Duration::hours(hours))
}
