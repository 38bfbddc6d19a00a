use super::PageQuery;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use cinescope_gateway::label_for_genre;
use cinescope_models::{Genre, Movie, MovieDetails, PaginatedResponse};
use serde::Serialize;
use serde_json::Value;

type MoviePage = Json<PaginatedResponse<Movie>>;

#[derive(Debug, Serialize)]
pub struct GenreMoviesResponse {
    pub label: String,
    #[serde(flatten)]
    pub page: PaginatedResponse<Movie>,
}

pub async fn genres_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Genre>>> {
    Ok(Json(state.gateway.get_genres().await?))
}

pub async fn trending_handler(State(state): State<AppState>, Query(q): Query<PageQuery>) -> ApiResult<MoviePage> {
    Ok(Json(state.gateway.get_trending_movies(q.page_or_first()).await?))
}

pub async fn top_rated_handler(State(state): State<AppState>, Query(q): Query<PageQuery>) -> ApiResult<MoviePage> {
    Ok(Json(state.gateway.get_top_rated_movies(q.page_or_first()).await?))
}

pub async fn upcoming_handler(State(state): State<AppState>, Query(q): Query<PageQuery>) -> ApiResult<MoviePage> {
    Ok(Json(state.gateway.get_upcoming_movies(q.page_or_first()).await?))
}

pub async fn now_playing_handler(State(state): State<AppState>, Query(q): Query<PageQuery>) -> ApiResult<MoviePage> {
    Ok(Json(state.gateway.get_now_playing_movies(q.page_or_first()).await?))
}

pub async fn genre_movies_handler(
    State(state): State<AppState>,
    Path(genre_id): Path<u32>,
    Query(q): Query<PageQuery>,
) -> ApiResult<Json<GenreMoviesResponse>> {
    let page = state
        .gateway
        .get_movies_by_genre(genre_id, q.page_or_first())
        .await?;

    Ok(Json(GenreMoviesResponse {
        label: label_for_genre(genre_id),
        page,
    }))
}

pub async fn movie_details_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
) -> ApiResult<Json<MovieDetails>> {
    state
        .gateway
        .try_get_movie_details(movie_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Movie not found"))
}

pub async fn recommendations_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
    Query(q): Query<PageQuery>,
) -> ApiResult<MoviePage> {
    Ok(Json(
        state
            .gateway
            .get_recommended_movies(movie_id, q.page_or_first())
            .await?,
    ))
}

pub async fn similar_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
    Query(q): Query<PageQuery>,
) -> ApiResult<MoviePage> {
    Ok(Json(
        state
            .gateway
            .get_similar_movies(movie_id, q.page_or_first())
            .await?,
    ))
}

pub async fn featured_handler(State(state): State<AppState>) -> ApiResult<Json<MovieDetails>> {
    state
        .gateway
        .try_get_featured_movie()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No featured movie available"))
}

pub async fn configuration_handler(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.gateway.get_tmdb_configuration().await?))
}
