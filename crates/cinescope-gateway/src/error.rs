use thiserror::Error;

/// Every failure the gateway can surface to its callers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GatewayError {
    /// No API key is configured
    #[error("TMDB API key is not configured")]
    Configuration,

    /// Upstream answered with a non-2xx status
    #[error("TMDB API error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape
    #[error("Failed to parse TMDB response: {0}")]
    Parse(String),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Upstream { status: 404, .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::Configuration)
    }
}
