use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::cache::token::Token;
use crate::cache::token_cache::TokenSink;
use crate::errors::{Error, Result};
use crate::sources::session::Session;

pub const KUBETOKEN_PATH: &str = "auth/kubetoken";

/// Client for the token-issuing endpoint, bound at construction to one
/// (context, namespace) and to a cache sink for successful fetches.
pub struct KubeTokenClient<C: TokenSink> {
    client: Client,
    url: String,
    context_name: String,
    namespace: String,
    cache: C,
}

impl<C: TokenSink> KubeTokenClient<C> {
    pub fn new(
        context_name: &str,
        token: &str,
        namespace: &str,
        cache: C,
        session: &impl Session,
    ) -> Result<Self> {
        if context_name.is_empty() {
            return Err(Error::MissingContext);
        }

        let path = format!("{KUBETOKEN_PATH}/{namespace}");
        let (client, url) = session.client_for(context_name, token, &path)?;

        Ok(Self {
            client,
            url,
            context_name: context_name.to_owned(),
            namespace: namespace.to_owned(),
            cache,
        })
    }

    /// Fetches a fresh token and returns the raw response body.
    ///
    /// The token is also written to the cache best-effort; a cache hit read
    /// back through [`KubeTokenCache::get`](crate::KubeTokenCache::get)
    /// re-encodes it, so the two paths return the same token in different
    /// byte layouts.
    pub fn get_kube_token(&self) -> Result<String> {
        debug!(
            context = %self.context_name,
            namespace = %self.namespace,
            "requesting fresh kubetoken"
        );

        let response = self.client.get(&self.url).send().map_err(Error::Network)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::NotLogged {
                context: self.context_name.clone(),
            });
        }

        if response.status() != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                status: response.status().to_string(),
            });
        }

        let body = response.text().map_err(Error::Read)?;

        let token: Token = serde_json::from_str(&body).map_err(Error::Decode)?;

        self.cache.set(&self.context_name, &self.namespace, token);

        Ok(body)
    }
}
