use crate::cache::CacheHint;
use crate::error::GatewayError;
use crate::http::ReqwestFetcher;
use crate::images::ImageUrlBuilder;
use crate::tmdb::api::{self, TmdbCredits, TmdbGenreList, TmdbMovie, TmdbMovieDetails, TmdbPage};
use crate::traits::HttpFetch;
use cinescope_config::{Config, DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL};
use cinescope_models::{Genre, Movie, MovieDetails, PaginatedResponse, SearchProxyMovie, SearchProxyResponse};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Hard cap on cast members kept from the credits endpoint
pub const MAX_CAST_MEMBERS: usize = 15;

/// The featured movie is drawn from this many top trending results
pub const FEATURED_POOL_SIZE: usize = 10;

type RandomSource = Arc<dyn Fn() -> f64 + Send + Sync>;

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub image_base_url: String,
}

impl GatewaySettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.api_key().map(str::to_string),
            base_url: config.tmdb.base_url.clone(),
            image_base_url: config.tmdb.image_base_url.clone(),
        }
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

/// Index of the featured pick: `floor(roll * min(10, len))`.
///
/// `roll` is expected in `[0, 1)`. Returns None when there is nothing to pick from.
pub fn featured_index(roll: f64, len: usize) -> Option<usize> {
    let pool = len.min(FEATURED_POOL_SIZE);
    if pool == 0 {
        return None;
    }
    let index = (roll * pool as f64).floor() as usize;
    Some(index.min(pool - 1))
}

/// Single chokepoint for every upstream movie API call.
///
/// Every method builds its own request; nothing is shared between calls apart
/// from whatever caching the `HttpFetch` implementation does.
#[derive(Clone)]
pub struct TmdbGateway {
    fetcher: Arc<dyn HttpFetch>,
    api_key: Option<String>,
    base_url: String,
    images: ImageUrlBuilder,
    random: RandomSource,
}

impl TmdbGateway {
    pub fn new(settings: GatewaySettings, fetcher: Arc<dyn HttpFetch>) -> Self {
        Self {
            fetcher,
            api_key: settings.api_key.filter(|k| !k.trim().is_empty()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            images: ImageUrlBuilder::new(settings.image_base_url),
            random: Arc::new(rand::random::<f64>),
        }
    }

    /// Gateway over reqwest with the default response cache
    pub fn from_config(config: &Config) -> Self {
        Self::new(GatewaySettings::from_config(config), Arc::new(ReqwestFetcher::new()))
    }

    /// Replace the `[0, 1)` source used for the featured pick
    pub fn with_random_source<F>(mut self, random: F) -> Self
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        self.random = Arc::new(random);
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::Configuration)?;

        let mut url = format!(
            "{}/{}?api_key={}",
            self.base_url,
            endpoint,
            urlencoding::encode(api_key)
        );
        for (name, value) in params {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        Ok(url)
    }

    async fn fetch<T>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        hint: CacheHint,
    ) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(endpoint, params)?;
        debug!(endpoint, ?hint, "TMDB request");

        let response = self.fetcher.get(&url, hint).await?;

        if !response.is_success() {
            let message = api::status_message(&response.body)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(GatewayError::Upstream {
                status: response.status,
                message,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| GatewayError::Parse(format!("{}: {}", endpoint, e)))
    }

    async fn fetch_movie_page(
        &self,
        endpoint: &str,
        mut params: Vec<(&str, String)>,
        page: u32,
        hint: CacheHint,
    ) -> Result<PaginatedResponse<Movie>, GatewayError> {
        params.push(("page", page.to_string()));
        let raw: TmdbPage<TmdbMovie> = self.fetch(endpoint, &params, hint).await?;
        Ok(raw.into_paginated(|movie| api::normalize_movie(movie, &self.images)))
    }

    fn language() -> (&'static str, String) {
        ("language", "en-US".to_string())
    }

    pub async fn get_genres(&self) -> Result<Vec<Genre>, GatewayError> {
        let list: TmdbGenreList = self
            .fetch("genre/movie/list", &[Self::language()], CacheHint::Listing)
            .await?;
        Ok(list.genres)
    }

    pub async fn get_trending_movies(&self, page: u32) -> Result<PaginatedResponse<Movie>, GatewayError> {
        self.fetch_movie_page("trending/movie/week", vec![Self::language()], page, CacheHint::Listing)
            .await
    }

    pub async fn get_top_rated_movies(&self, page: u32) -> Result<PaginatedResponse<Movie>, GatewayError> {
        self.fetch_movie_page("movie/top_rated", vec![Self::language()], page, CacheHint::Listing)
            .await
    }

    pub async fn get_upcoming_movies(&self, page: u32) -> Result<PaginatedResponse<Movie>, GatewayError> {
        self.fetch_movie_page("movie/upcoming", vec![Self::language()], page, CacheHint::Listing)
            .await
    }

    pub async fn get_now_playing_movies(&self, page: u32) -> Result<PaginatedResponse<Movie>, GatewayError> {
        self.fetch_movie_page("movie/now_playing", vec![Self::language()], page, CacheHint::Listing)
            .await
    }

    /// Discover movies in one genre, most popular first
    pub async fn get_movies_by_genre(
        &self,
        genre_id: u32,
        page: u32,
    ) -> Result<PaginatedResponse<Movie>, GatewayError> {
        let params = vec![
            Self::language(),
            ("with_genres", genre_id.to_string()),
            ("sort_by", "popularity.desc".to_string()),
        ];
        self.fetch_movie_page("discover/movie", params, page, CacheHint::Listing)
            .await
    }

    /// Title search. A blank query returns the empty first page without touching the network.
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<PaginatedResponse<Movie>, GatewayError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(PaginatedResponse::empty());
        }

        let params = vec![Self::language(), ("query", query.to_string())];
        self.fetch_movie_page("search/movie", params, page, CacheHint::Search)
            .await
    }

    pub async fn get_recommended_movies(
        &self,
        movie_id: u64,
        page: u32,
    ) -> Result<PaginatedResponse<Movie>, GatewayError> {
        let endpoint = format!("movie/{}/recommendations", movie_id);
        self.fetch_movie_page(&endpoint, vec![Self::language()], page, CacheHint::Listing)
            .await
    }

    pub async fn get_similar_movies(
        &self,
        movie_id: u64,
        page: u32,
    ) -> Result<PaginatedResponse<Movie>, GatewayError> {
        let endpoint = format!("movie/{}/similar", movie_id);
        self.fetch_movie_page(&endpoint, vec![Self::language()], page, CacheHint::Listing)
            .await
    }

    /// Upstream `configuration` object, passed through as-is
    pub async fn get_tmdb_configuration(&self) -> Result<Value, GatewayError> {
        self.fetch("configuration", &[], CacheHint::Configuration).await
    }

    /// Movie metadata and credits, fetched concurrently and merged.
    ///
    /// `Ok(None)` when upstream reports the movie does not exist. Any other
    /// failure on either side fails the whole call.
    pub async fn try_get_movie_details(&self, movie_id: u64) -> Result<Option<MovieDetails>, GatewayError> {
        let details_endpoint = format!("movie/{}", movie_id);
        let credits_endpoint = format!("movie/{}/credits", movie_id);
        let language = [Self::language()];

        let joined = futures::try_join!(
            self.fetch::<TmdbMovieDetails>(&details_endpoint, &language, CacheHint::Listing),
            self.fetch::<TmdbCredits>(&credits_endpoint, &language, CacheHint::Listing),
        );

        match joined {
            Ok((details, credits)) => Ok(Some(api::normalize_details(
                details,
                credits,
                &self.images,
                MAX_CAST_MEMBERS,
            ))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Like `try_get_movie_details`, but every failure is logged and reported as None
    pub async fn get_movie_details(&self, movie_id: u64) -> Option<MovieDetails> {
        match self.try_get_movie_details(movie_id).await {
            Ok(Some(details)) => Some(details),
            Ok(None) => {
                error!(movie_id, "Movie not found upstream");
                None
            }
            Err(e) => {
                error!(movie_id, error = %e, "Failed to fetch movie details");
                None
            }
        }
    }

    /// Pick one of the top trending movies at random and load its details.
    ///
    /// `Ok(None)` when nothing is trending or the picked movie has no details.
    pub async fn try_get_featured_movie(&self) -> Result<Option<MovieDetails>, GatewayError> {
        let trending = self.get_trending_movies(1).await?;

        let roll = (self.random)();
        let Some(index) = featured_index(roll, trending.results.len()) else {
            info!("No trending movies to feature");
            return Ok(None);
        };

        let movie_id = trending.results[index].id;
        debug!(movie_id, index, "Featured movie picked");
        self.try_get_movie_details(movie_id).await
    }

    /// Like `try_get_featured_movie`, but every failure is logged and reported as None
    pub async fn get_featured_movie(&self) -> Option<MovieDetails> {
        match self.try_get_featured_movie().await {
            Ok(featured) => featured,
            Err(e) => {
                error!(error = %e, "Failed to fetch featured movie");
                None
            }
        }
    }

    /// Raw search used by the `/api/search` proxy.
    ///
    /// Results are upstream objects plus empty `genres`/`cast`; no genre
    /// resolution and no image rewriting happens on this path.
    pub async fn search_proxy(&self, query: &str, page: Option<u32>) -> Result<SearchProxyResponse, GatewayError> {
        let mut params = vec![("query", query.to_string())];
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }

        let raw: TmdbPage<Map<String, Value>> = self
            .fetch("search/movie", &params, CacheHint::Search)
            .await?;

        Ok(SearchProxyResponse {
            total_results: raw.total_results.unwrap_or(0),
            results: raw.results.into_iter().map(SearchProxyMovie::from_upstream).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubFetcher;
    use cinescope_models::Genre;
    use serde_json::json;

    const BASE: &str = "https://api.themoviedb.org/3";

    fn settings() -> GatewaySettings {
        GatewaySettings {
            api_key: Some("test_key".to_string()),
            ..GatewaySettings::default()
        }
    }

    fn build_gateway(stub: StubFetcher) -> (TmdbGateway, Arc<StubFetcher>) {
        let stub = Arc::new(stub);
        (TmdbGateway::new(settings(), stub.clone()), stub)
    }

    fn movie_json(id: u64, poster: Option<&str>) -> Value {
        json!({
            "id": id,
            "title": format!("Movie {}", id),
            "overview": "",
            "poster_path": poster,
            "backdrop_path": null,
            "release_date": "2024-01-01",
            "vote_average": 6.5,
            "vote_count": 10,
            "genre_ids": []
        })
    }

    fn trending_json(count: u64) -> Value {
        let results: Vec<Value> = (1..=count).map(|id| movie_json(id, None)).collect();
        json!({"page": 1, "results": results, "total_pages": 1, "total_results": count})
    }

    fn details_json(id: u64) -> Value {
        json!({
            "id": id,
            "title": format!("Movie {}", id),
            "overview": "Details",
            "poster_path": "/poster.jpg",
            "backdrop_path": "/backdrop.jpg",
            "release_date": "1999-03-30",
            "vote_average": 8.2,
            "vote_count": 25000,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "runtime": 136,
            "budget": 63000000,
            "revenue": 463517383,
            "status": "Released",
            "tagline": "Welcome to the Real World.",
            "homepage": "",
            "imdb_id": "tt0133093",
            "production_companies": [
                {"id": 79, "name": "Village Roadshow Pictures", "logo_path": "/logo.png", "origin_country": "US"}
            ],
            "production_countries": [{"iso_3166_1": "US", "name": "United States of America"}],
            "spoken_languages": [{"iso_639_1": "en", "english_name": "English", "name": "English"}]
        })
    }

    fn credits_json(count: u64) -> Value {
        let cast: Vec<Value> = (0..count)
            .map(|i| json!({
                "id": 100 + i,
                "name": format!("Actor {}", i),
                "character": format!("Role {}", i),
                "profile_path": format!("/actor{}.jpg", i),
                "order": i
            }))
            .collect();
        json!({"id": 603, "cast": cast})
    }

    #[tokio::test]
    async fn test_trending_requests_page_and_key() {
        let (gateway, stub) = build_gateway(
            StubFetcher::new(BASE).with_json("trending/movie/week", trending_json(2)),
        );

        let page = gateway.get_trending_movies(3).await.unwrap();
        assert_eq!(page.results.len(), 2);

        let urls = stub.urls();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].starts_with("https://api.themoviedb.org/3/trending/movie/week?api_key=test_key"));
        assert!(urls[0].contains("page=3"));
        assert_eq!(stub.hints(), vec![CacheHint::Listing]);
    }

    #[tokio::test]
    async fn test_listing_normalizes_posters_and_totals() {
        let (gateway, _stub) = build_gateway(StubFetcher::new(BASE).with_json(
            "movie/top_rated",
            json!({
                "page": 1,
                "total_results": 2,
                "results": [movie_json(1, Some("/a.jpg")), movie_json(2, Some("/b.jpg"))]
            }),
        ));

        let page = gateway.get_top_rated_movies(1).await.unwrap();
        assert_eq!(page.total_results, 2);
        assert_eq!(page.total_pages, 0);
        assert_eq!(
            page.results[0].poster_path.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/a.jpg")
        );
        assert_eq!(
            page.results[1].poster_path.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/b.jpg")
        );
        assert!(page.results[0].genres.is_empty());
    }

    #[tokio::test]
    async fn test_missing_total_results_defaults_to_zero() {
        let (gateway, _stub) = build_gateway(StubFetcher::new(BASE).with_json(
            "movie/upcoming",
            json!({"page": 1, "results": [movie_json(5, None)]}),
        ));

        let page = gateway.get_upcoming_movies(1).await.unwrap();
        assert_eq!(page.total_results, 0);
        assert_eq!(page.results[0].poster_path, None);
    }

    #[tokio::test]
    async fn test_genre_ids_resolve_through_static_table() {
        let mut movie = movie_json(7, None);
        movie["genre_ids"] = json!([35, 999, 18]);
        let (gateway, _stub) = build_gateway(StubFetcher::new(BASE).with_json(
            "movie/now_playing",
            json!({"page": 1, "results": [movie], "total_pages": 1, "total_results": 1}),
        ));

        let page = gateway.get_now_playing_movies(1).await.unwrap();
        assert_eq!(
            page.results[0].genres,
            vec![Genre::new(35, "Comedy"), Genre::new(18, "Drama")]
        );
    }

    #[tokio::test]
    async fn test_movies_by_genre_query() {
        let (gateway, stub) = build_gateway(
            StubFetcher::new(BASE).with_json("discover/movie", trending_json(1)),
        );

        gateway.get_movies_by_genre(878, 2).await.unwrap();
        let url = &stub.urls()[0];
        assert!(url.contains("with_genres=878"));
        assert!(url.contains("sort_by=popularity.desc"));
        assert!(url.contains("page=2"));
    }

    #[tokio::test]
    async fn test_blank_search_skips_network() {
        let (gateway, stub) = build_gateway(StubFetcher::new(BASE));

        for query in ["", "   "] {
            let page = gateway.search_movies(query, 4).await.unwrap();
            assert_eq!(page, PaginatedResponse::empty());
        }
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_encodes_query_with_search_hint() {
        let (gateway, stub) = build_gateway(
            StubFetcher::new(BASE).with_json("search/movie", trending_json(1)),
        );

        gateway.search_movies("  the matrix & co ", 1).await.unwrap();
        assert!(stub.urls()[0].contains("query=the%20matrix%20%26%20co"));
        assert_eq!(stub.hints(), vec![CacheHint::Search]);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        let stub = Arc::new(StubFetcher::new(BASE).with_json("genre/movie/list", json!({"genres": []})));
        let gateway = TmdbGateway::new(GatewaySettings::default(), stub.clone());

        assert_eq!(gateway.get_genres().await, Err(GatewayError::Configuration));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upstream_error_embeds_status_message() {
        let (gateway, _stub) = build_gateway(StubFetcher::new(BASE).with_status(
            "genre/movie/list",
            401,
            json!({"status_code": 7, "status_message": "Invalid API key: You must be granted a valid key."}),
        ));

        let err = gateway.get_genres().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "TMDB API error: 401 - Invalid API key: You must be granted a valid key."
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (gateway, _stub) = build_gateway(StubFetcher::new(BASE).with_raw("genre/movie/list", 200, "not json"));
        assert!(matches!(gateway.get_genres().await, Err(GatewayError::Parse(_))));
    }

    #[tokio::test]
    async fn test_details_merges_credits_and_caps_cast() {
        let (gateway, stub) = build_gateway(
            StubFetcher::new(BASE)
                .with_json("movie/603", details_json(603))
                .with_json("movie/603/credits", credits_json(40)),
        );

        let details = gateway.get_movie_details(603).await.unwrap();
        assert_eq!(details.cast().len(), 15);
        assert_eq!(details.cast()[0].name, "Actor 0");
        assert_eq!(details.cast()[14].name, "Actor 14");
        assert_eq!(
            details.cast()[0].profile_path.as_deref(),
            Some("https://image.tmdb.org/t/p/w185/actor0.jpg")
        );
        assert_eq!(
            details.movie.backdrop_path.as_deref(),
            Some("https://image.tmdb.org/t/p/w1280/backdrop.jpg")
        );
        assert_eq!(details.runtime, Some(136));
        assert_eq!(details.homepage, None);
        assert_eq!(
            details.production_companies[0].logo_path.as_deref(),
            Some("https://image.tmdb.org/t/p/w185/logo.png")
        );
        assert_eq!(stub.call_count(), 2);
    }

    #[tokio::test]
    async fn test_details_cast_length_follows_upstream_when_short() {
        for count in [0, 3, 15] {
            let (gateway, _stub) = build_gateway(
                StubFetcher::new(BASE)
                    .with_json("movie/603", details_json(603))
                    .with_json("movie/603/credits", credits_json(count)),
            );
            let details = gateway.get_movie_details(603).await.unwrap();
            assert_eq!(details.cast().len(), count as usize);
        }
    }

    #[tokio::test]
    async fn test_details_not_found_is_none() {
        let (gateway, _stub) = build_gateway(StubFetcher::new(BASE));

        assert_eq!(gateway.try_get_movie_details(999).await, Ok(None));
        assert_eq!(gateway.get_movie_details(999).await, None);
    }

    #[tokio::test]
    async fn test_details_failure_is_error_then_swallowed() {
        let (gateway, _stub) = build_gateway(
            StubFetcher::new(BASE)
                .with_json("movie/603", details_json(603))
                .with_network_error("movie/603/credits", "connection reset"),
        );

        assert_eq!(
            gateway.try_get_movie_details(603).await,
            Err(GatewayError::Network("connection reset".to_string()))
        );
        assert_eq!(gateway.get_movie_details(603).await, None);
    }

    #[test]
    fn test_featured_index_bounds() {
        assert_eq!(featured_index(0.5, 0), None);
        assert_eq!(featured_index(0.0, 20), Some(0));
        assert_eq!(featured_index(0.999_999, 20), Some(9));
        assert_eq!(featured_index(0.55, 20), Some(5));
        for len in 1..=10 {
            for step in 0..100 {
                let roll = step as f64 / 100.0;
                let index = featured_index(roll, len).unwrap();
                assert!(index < len);
                assert_eq!(index, (roll * len as f64).floor() as usize);
            }
        }
    }

    #[tokio::test]
    async fn test_featured_picks_within_top_ten() {
        let (gateway, stub) = build_gateway(
            StubFetcher::new(BASE)
                .with_json("trending/movie/week", trending_json(20))
                .with_json("movie/10", details_json(10))
                .with_json("movie/10/credits", credits_json(2)),
        );
        // 0.95 * min(10, 20) = 9.5 -> index 9 -> movie id 10
        let gateway = gateway.with_random_source(|| 0.95);

        let featured = gateway.get_featured_movie().await.unwrap();
        assert_eq!(featured.id(), 10);
        assert!(stub.urls().iter().any(|u| u.contains("/movie/10?")));
    }

    #[tokio::test]
    async fn test_featured_empty_trending_is_none() {
        let (gateway, stub) = build_gateway(
            StubFetcher::new(BASE).with_json("trending/movie/week", trending_json(0)),
        );

        assert_eq!(gateway.get_featured_movie().await, None);
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_featured_pick_without_details_is_none() {
        let (gateway, stub) = build_gateway(
            StubFetcher::new(BASE).with_json("trending/movie/week", trending_json(3)),
        );
        let gateway = gateway.with_random_source(|| 0.99);

        assert_eq!(gateway.try_get_featured_movie().await, Ok(None));
        assert!(stub.urls().iter().any(|u| u.contains("/movie/3?")));

        assert_eq!(gateway.get_featured_movie().await, None);
    }

    #[tokio::test]
    async fn test_featured_trending_failure_is_none() {
        let (gateway, _stub) = build_gateway(StubFetcher::new(BASE).with_status(
            "trending/movie/week",
            503,
            json!({"status_code": 9, "status_message": "Service offline."}),
        ));

        assert!(gateway.try_get_featured_movie().await.is_err());
        assert_eq!(gateway.get_featured_movie().await, None);
    }

    #[tokio::test]
    async fn test_recommendations_and_similar_endpoints() {
        let (gateway, stub) = build_gateway(
            StubFetcher::new(BASE)
                .with_json("movie/603/recommendations", trending_json(3))
                .with_json("movie/603/similar", trending_json(4)),
        );

        assert_eq!(gateway.get_recommended_movies(603, 2).await.unwrap().results.len(), 3);
        assert_eq!(gateway.get_similar_movies(603, 1).await.unwrap().results.len(), 4);
        let urls = stub.urls();
        assert!(urls[0].contains("page=2"));
        assert!(urls[1].contains("/movie/603/similar?"));
    }

    #[tokio::test]
    async fn test_configuration_passthrough_uses_long_hint() {
        let config = json!({
            "images": {
                "secure_base_url": "https://image.tmdb.org/t/p/",
                "poster_sizes": ["w92", "w500", "original"]
            },
            "change_keys": ["adult", "title"]
        });
        let (gateway, stub) = build_gateway(StubFetcher::new(BASE).with_json("configuration", config.clone()));

        assert_eq!(gateway.get_tmdb_configuration().await.unwrap(), config);
        assert_eq!(stub.hints(), vec![CacheHint::Configuration]);
    }

    #[tokio::test]
    async fn test_search_proxy_passes_results_through() {
        let mut hit = movie_json(1, Some("/a.jpg"));
        hit["genre_ids"] = json!([28]);
        let (gateway, stub) = build_gateway(StubFetcher::new(BASE).with_json(
            "search/movie",
            json!({"page": 1, "results": [hit], "total_results": 1}),
        ));

        let response = gateway.search_proxy("matrix", None).await.unwrap();
        assert_eq!(response.total_results, 1);

        let body = serde_json::to_value(&response).unwrap();
        let first = &body["results"][0];
        assert_eq!(first["poster_path"], "/a.jpg");
        assert_eq!(first["genre_ids"], json!([28]));
        assert_eq!(first["genres"], json!([]));
        assert_eq!(first["cast"], json!([]));
        assert!(!stub.urls()[0].contains("page="));
    }
}
