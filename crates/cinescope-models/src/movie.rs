use serde::{Deserialize, Serialize};
use crate::cast::CastMember;
use crate::genre::Genre;
use crate::production::{ProductionCompany, ProductionCountry, SpokenLanguage};

/// A movie in list form, as produced by the gateway.
///
/// `poster_path` and `backdrop_path` hold absolute image URLs or None, never a
/// bare relative upstream path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub cast: Vec<CastMember>, // Only filled by the details endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
}

impl Movie {
    /// Release year parsed from the leading `YYYY` of `release_date`
    pub fn year(&self) -> Option<u32> {
        self.release_date.get(..4).and_then(|y| y.parse().ok())
    }
}

/// Full movie record from the details endpoint merged with its credits.
///
/// Serializes flat: every `Movie` field sits next to the detail fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub status: String,
    pub tagline: Option<String>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
}

impl MovieDetails {
    pub fn id(&self) -> u64 {
        self.movie.id
    }

    pub fn title(&self) -> &str {
        &self.movie.title
    }

    pub fn cast(&self) -> &[CastMember] {
        &self.movie.cast
    }
}
