//! Canned-response `HttpFetch` for tests.

use async_trait::async_trait;
use crate::cache::CacheHint;
use crate::error::GatewayError;
use crate::traits::{HttpFetch, UpstreamResponse};
use std::sync::Mutex;

enum Reply {
    Response(UpstreamResponse),
    NetworkError(String),
}

struct Route {
    path: String,
    reply: Reply,
}

/// Answers requests by matching the URL path (everything between the base URL
/// and `?`) against registered routes, and records every URL it is asked for.
/// Unmatched paths get a 404 with a TMDB-style body.
pub struct StubFetcher {
    base_url: String,
    routes: Vec<Route>,
    calls: Mutex<Vec<(String, CacheHint)>>,
}

impl StubFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            routes: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_json(mut self, path: &str, body: serde_json::Value) -> Self {
        self.routes.push(Route {
            path: path.to_string(),
            reply: Reply::Response(UpstreamResponse::new(200, body.to_string())),
        });
        self
    }

    pub fn with_status(mut self, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.routes.push(Route {
            path: path.to_string(),
            reply: Reply::Response(UpstreamResponse::new(status, body.to_string())),
        });
        self
    }

    pub fn with_raw(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.push(Route {
            path: path.to_string(),
            reply: Reply::Response(UpstreamResponse::new(status, body)),
        });
        self
    }

    pub fn with_network_error(mut self, path: &str, message: &str) -> Self {
        self.routes.push(Route {
            path: path.to_string(),
            reply: Reply::NetworkError(message.to_string()),
        });
        self
    }

    /// Every URL requested so far, in order
    pub fn urls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.iter().map(|(url, _)| url.clone()).collect())
            .unwrap_or_default()
    }

    pub fn hints(&self) -> Vec<CacheHint> {
        self.calls
            .lock()
            .map(|calls| calls.iter().map(|(_, hint)| *hint).collect())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    fn path_of<'a>(&self, url: &'a str) -> &'a str {
        let rest = url.strip_prefix(self.base_url.as_str()).unwrap_or(url);
        let rest = rest.trim_start_matches('/');
        rest.split('?').next().unwrap_or(rest)
    }
}

#[async_trait]
impl HttpFetch for StubFetcher {
    async fn get(&self, url: &str, hint: CacheHint) -> Result<UpstreamResponse, GatewayError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((url.to_string(), hint));
        }

        let path = self.path_of(url);
        match self.routes.iter().rev().find(|route| route.path == path) {
            Some(Route { reply: Reply::Response(response), .. }) => Ok(response.clone()),
            Some(Route { reply: Reply::NetworkError(message), .. }) => {
                Err(GatewayError::Network(message.clone()))
            }
            None => Ok(UpstreamResponse::new(
                404,
                serde_json::json!({
                    "success": false,
                    "status_code": 34,
                    "status_message": "The resource you requested could not be found."
                })
                .to_string(),
            )),
        }
    }
}
