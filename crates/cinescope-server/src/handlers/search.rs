use super::PageQuery;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use cinescope_models::SearchProxyResponse;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub page: Option<String>,
}

/// Pass-through search used by the browser's search box.
///
/// Results are the upstream records as-is with empty `genres`/`cast`; no image
/// URL rewriting or genre resolution happens on this path.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchProxyResponse>> {
    // Whitespace-only counts as missing, and the trimmed text is what goes upstream
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing query parameter"))?;

    if !state.gateway.has_api_key() {
        return Err(ApiError::configuration());
    }

    debug!(query = q, "Proxying search");
    let page = PageQuery { page: query.page.clone() }.parsed();
    let response = state.gateway.search_proxy(q, page).await?;
    Ok(Json(response))
}
