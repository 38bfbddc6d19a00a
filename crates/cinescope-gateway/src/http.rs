use async_trait::async_trait;
use crate::cache::{CacheHint, ResponseCache};
use crate::error::GatewayError;
use crate::traits::{HttpFetch, UpstreamResponse};
use reqwest::Client;
use tracing::{debug, trace};

/// Create the reqwest Client used for upstream calls
pub fn create_tmdb_client() -> Client {
    Client::builder()
        .user_agent(concat!("cinescope/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// `HttpFetch` over reqwest, honoring cache hints with an in-process TTL cache.
pub struct ReqwestFetcher {
    client: Client,
    cache: Option<ResponseCache>,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: create_tmdb_client(),
            cache: Some(ResponseCache::default()),
        }
    }

    /// Every call goes to the network
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str, hint: CacheHint) -> Result<UpstreamResponse, GatewayError> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(url) {
                trace!(?hint, "Upstream cache hit");
                return Ok(UpstreamResponse::new(200, body));
            }
        }

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.without_url().to_string()))?;

        let upstream = UpstreamResponse::new(status, body);
        if upstream.is_success() {
            if let Some(cache) = &self.cache {
                cache.insert(url, upstream.body.clone(), hint);
            }
        } else {
            debug!(status, "Upstream returned non-success status");
        }

        Ok(upstream)
    }
}
