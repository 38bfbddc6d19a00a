use async_trait::async_trait;
use crate::cache::CacheHint;
use crate::error::GatewayError;

/// A raw upstream answer: status code plus body text.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP capability the gateway consumes.
///
/// Implementations receive the fully built URL (API key included) and the
/// cache-lifetime hint for the call. Only transport failures are errors here;
/// non-2xx answers come back as a normal `UpstreamResponse`.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(&self, url: &str, hint: CacheHint) -> Result<UpstreamResponse, GatewayError>;
}
