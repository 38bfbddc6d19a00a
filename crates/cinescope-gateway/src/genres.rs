//! Static genre table and the two lookup policies built on it.
//!
//! `resolve_genres` drops ids the table does not know. `label_for_genre` is for
//! category page titles and falls back to `Category <id>`. Keep them separate.

use cinescope_models::Genre;

const GENRE_TABLE: &[(u32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (53, "Thriller"),
];

pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRE_TABLE
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

/// Map upstream genre ids to `{id, name}` pairs, dropping unknown ids.
pub fn resolve_genres(ids: &[u32]) -> Vec<Genre> {
    ids.iter()
        .filter_map(|id| genre_name(*id).map(|name| Genre::new(*id, name)))
        .collect()
}

/// Display label for a category page. Unknown ids become `Category <id>`.
pub fn label_for_genre(id: u32) -> String {
    match genre_name(id) {
        Some(name) => name.to_string(),
        None => format!("Category {}", id),
    }
}
