use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// Token issued by the cluster for one (context, namespace).
///
/// The cache interprets a single field, `status.expirationTimestamp`;
/// everything else is opaque and round-trips through the flattened maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub status: TokenStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenStatus {
    #[serde(rename = "expirationTimestamp")]
    pub expiration_timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Token {
    /// Usable only strictly before the expiration instant; a token
    /// expiring exactly at `now` is already stale.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.status.expiration_timestamp > now
    }
}

/// Serializes `value` pretty-printed with tab indentation, the layout the
/// cache file has always used.
pub fn to_tab_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser).map_err(Error::Decode)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8(out).expect("non UTF-8 JSON"))
}
