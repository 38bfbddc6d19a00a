use crate::handlers::{favorites, movies, search};
use crate::state::AppState;
use axum::routing::{get, put};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route("/search", get(search::search_handler))
        .route("/genres", get(movies::genres_handler))
        .route("/genres/{id}/movies", get(movies::genre_movies_handler))
        .route("/movies/trending", get(movies::trending_handler))
        .route("/movies/top-rated", get(movies::top_rated_handler))
        .route("/movies/upcoming", get(movies::upcoming_handler))
        .route("/movies/now-playing", get(movies::now_playing_handler))
        .route("/movies/{id}", get(movies::movie_details_handler))
        .route("/movies/{id}/recommendations", get(movies::recommendations_handler))
        .route("/movies/{id}/similar", get(movies::similar_handler))
        .route("/featured", get(movies::featured_handler))
        .route("/configuration", get(movies::configuration_handler))
        .route("/favorites", get(favorites::list_favorites_handler))
        .route(
            "/favorites/{id}",
            put(favorites::add_favorite_handler).delete(favorites::remove_favorite_handler),
        );

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
