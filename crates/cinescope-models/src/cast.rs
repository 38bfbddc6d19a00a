use serde::{Deserialize, Serialize};

/// A credited actor on a movie, as returned by the details endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    /// Absolute profile image URL (w185) or None
    pub profile_path: Option<String>,
    // Upstream billing position; carried through but never used for sorting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}
