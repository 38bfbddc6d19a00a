use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteChange {
    pub id: u64,
    /// False when the call left the list untouched
    pub changed: bool,
    pub favorites: Vec<u64>,
}

pub async fn list_favorites_handler(State(state): State<AppState>) -> Json<FavoritesResponse> {
    let favorites = state.favorites.lock().await;
    Json(FavoritesResponse {
        favorites: favorites.list().to_vec(),
    })
}

pub async fn add_favorite_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<FavoriteChange>> {
    let mut favorites = state.favorites.lock().await;
    let changed = favorites.add(id)?;
    Ok(Json(FavoriteChange {
        id,
        changed,
        favorites: favorites.list().to_vec(),
    }))
}

pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<FavoriteChange>> {
    let mut favorites = state.favorites.lock().await;
    let changed = favorites.remove(id)?;
    Ok(Json(FavoriteChange {
        id,
        changed,
        favorites: favorites.list().to_vec(),
    }))
}
