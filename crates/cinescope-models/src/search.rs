use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::cast::CastMember;
use crate::genre::Genre;

/// Body returned by the `/api/search` proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchProxyResponse {
    pub total_results: u64,
    pub results: Vec<SearchProxyMovie>,
}

/// An upstream search hit passed through untouched, plus empty `genres` and
/// `cast` placeholders. No genre resolution or image rewriting happens here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchProxyMovie {
    #[serde(flatten)]
    pub upstream: Map<String, Value>,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
}

impl SearchProxyMovie {
    pub fn from_upstream(mut upstream: Map<String, Value>) -> Self {
        // The placeholders below replace whatever upstream may have sent
        upstream.remove("genres");
        upstream.remove("cast");
        Self {
            upstream,
            genres: Vec::new(),
            cast: Vec::new(),
        }
    }
}
