use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::errors::{Error, Result};

/// Resolves an authenticated transport for a context.
///
/// The surrounding CLI knows where each context's API lives and holds its
/// session credential; `BearerSession` covers the common single-endpoint
/// case and tests inject mock servers through the same seam.
pub trait Session {
    /// Returns a client carrying the context's credentials together with
    /// the absolute URL for `path` on that context's API.
    fn client_for(&self, context_name: &str, token: &str, path: &str) -> Result<(Client, String)>;
}

/// Session over a fixed base URL, authenticating every request with a
/// bearer header.
#[derive(Debug, Clone)]
pub struct BearerSession {
    base_url: String,
}

impl BearerSession {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Session for BearerSession {
    fn client_for(&self, context_name: &str, token: &str, path: &str) -> Result<(Client, String)> {
        // A credential that cannot even form a header means the stored
        // session for this context is unusable.
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            Error::NotLogged {
                context: context_name.to_owned(),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        // No request deadline here; callers impose their own.
        let client = Client::builder()
            .default_headers(headers)
            .timeout(None)
            .build()
            .map_err(Error::Network)?;

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        Ok((client, url))
    }
}
