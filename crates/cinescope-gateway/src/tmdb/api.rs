//! Upstream response shapes and their normalization into the shared model.

use crate::genres::resolve_genres;
use crate::images::ImageUrlBuilder;
use cinescope_models::{
    CastMember, Genre, Movie, MovieDetails, PaginatedResponse, ProductionCompany,
    ProductionCountry, SpokenLanguage,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TmdbErrorBody {
    pub status_code: Option<i64>,
    pub status_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbPage<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

fn first_page() -> u32 {
    1
}

impl<T> TmdbPage<T> {
    pub fn into_paginated<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            page: self.page,
            results: self.results,
            total_pages: self.total_pages.unwrap_or(0),
            total_results: self.total_results.unwrap_or(0),
        }
        .map(f)
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbGenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// A movie as it appears in listing, discover and search results
#[derive(Debug, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    // Some endpoints embed full genre objects instead of ids
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub popularity: Option<f64>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
}

#[derive(Debug, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(flatten)]
    pub base: TmdbMovie,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    pub tagline: Option<String>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<TmdbProductionCompany>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbProductionCompany {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: String,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub order: Option<u32>,
}

/// Upstream `status_message` from an error body, if the body has one
pub fn status_message(body: &str) -> Option<String> {
    serde_json::from_str::<TmdbErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .filter(|m| !m.is_empty())
}

pub fn normalize_movie(raw: TmdbMovie, images: &ImageUrlBuilder) -> Movie {
    let genres = match raw.genres {
        Some(embedded) if !embedded.is_empty() => embedded,
        _ => resolve_genres(&raw.genre_ids),
    };

    Movie {
        id: raw.id,
        title: raw.title,
        overview: raw.overview.unwrap_or_default(),
        poster_path: images.poster(raw.poster_path.as_deref()),
        backdrop_path: images.backdrop(raw.backdrop_path.as_deref()),
        release_date: raw.release_date.unwrap_or_default(),
        vote_average: raw.vote_average.unwrap_or(0.0),
        vote_count: raw.vote_count.unwrap_or(0),
        genres,
        cast: Vec::new(),
        original_title: raw.original_title,
        original_language: raw.original_language,
        popularity: raw.popularity,
        adult: raw.adult,
        video: raw.video,
    }
}

pub fn normalize_cast(raw: Vec<TmdbCastMember>, images: &ImageUrlBuilder, limit: usize) -> Vec<CastMember> {
    // Rewrite first, then cap; upstream order is kept as-is
    raw.into_iter()
        .map(|member| CastMember {
            id: member.id,
            name: member.name,
            character: member.character.unwrap_or_default(),
            profile_path: images.profile(member.profile_path.as_deref()),
            order: member.order,
        })
        .take(limit)
        .collect()
}

pub fn normalize_details(
    raw: TmdbMovieDetails,
    credits: TmdbCredits,
    images: &ImageUrlBuilder,
    cast_limit: usize,
) -> MovieDetails {
    let mut movie = normalize_movie(raw.base, images);
    movie.cast = normalize_cast(credits.cast, images, cast_limit);

    MovieDetails {
        movie,
        runtime: raw.runtime,
        budget: raw.budget.unwrap_or(0),
        revenue: raw.revenue.unwrap_or(0),
        status: raw.status.unwrap_or_default(),
        tagline: raw.tagline.filter(|t| !t.is_empty()),
        homepage: raw.homepage.filter(|h| !h.is_empty()),
        imdb_id: raw.imdb_id,
        production_companies: raw
            .production_companies
            .into_iter()
            .map(|company| ProductionCompany {
                id: company.id,
                name: company.name,
                logo_path: images.logo(company.logo_path.as_deref()),
                origin_country: company.origin_country,
            })
            .collect(),
        production_countries: raw.production_countries,
        spoken_languages: raw.spoken_languages,
    }
}
