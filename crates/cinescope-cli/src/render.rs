//! Human-readable tables for movies and genres.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color, Table};
use cinescope_models::{Genre, Movie, MovieDetails, PaginatedResponse};

fn styled_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn header(title: &str) -> Cell {
    Cell::new(title)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn format_rating(vote_average: f64, vote_count: u64) -> String {
    if vote_count == 0 {
        return "-".to_string();
    }
    format!("{:.1} ({})", vote_average, vote_count)
}

pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) if m > 0 => format!("{}h {:02}m", m / 60, m % 60),
        _ => "-".to_string(),
    }
}

pub fn genre_names(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn movie_table(movies: &[Movie]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        header("ID"),
        header("Title"),
        header("Year"),
        header("Rating"),
        header("Genres"),
    ]);
    for movie in movies {
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(movie.year().map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())),
            Cell::new(format_rating(movie.vote_average, movie.vote_count)),
            Cell::new(genre_names(&movie.genres)),
        ]);
    }
    table
}

pub fn page_footer(page: &PaginatedResponse<Movie>) -> String {
    format!(
        "Page {} of {} ({} results)",
        page.page, page.total_pages, page.total_results
    )
}

pub fn genre_table(genres: &[Genre]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![header("ID"), header("Genre")]);
    for genre in genres {
        table.add_row(vec![Cell::new(genre.id), Cell::new(&genre.name)]);
    }
    table
}

pub fn details_table(details: &MovieDetails) -> Table {
    let movie = &details.movie;
    let mut table = styled_table();
    table.set_header(vec![header(&movie.title), Cell::new("")]);

    let mut row = |label: &str, value: String| {
        if !value.is_empty() {
            table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new(value)]);
        }
    };

    row("Tagline", details.tagline.clone().unwrap_or_default());
    row("Released", movie.release_date.clone());
    row("Runtime", format_runtime(details.runtime));
    row("Rating", format_rating(movie.vote_average, movie.vote_count));
    row("Genres", genre_names(&movie.genres));
    row("Status", details.status.clone());
    row("IMDb", details.imdb_id.clone().unwrap_or_default());
    row("Overview", movie.overview.clone());
    row(
        "Studios",
        details
            .production_companies
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    );
    row("Poster", movie.poster_path.clone().unwrap_or_default());

    table
}

pub fn cast_table(details: &MovieDetails) -> Table {
    let mut table = styled_table();
    table.set_header(vec![header("Actor"), header("Character")]);
    for member in details.cast() {
        table.add_row(vec![
            Cell::new(&member.name),
            Cell::new(&member.character),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(7.25, 120), "7.2 (120)");
        assert_eq!(format_rating(0.0, 0), "-");
    }

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(Some(136)), "2h 16m");
        assert_eq!(format_runtime(Some(45)), "0h 45m");
        assert_eq!(format_runtime(Some(0)), "-");
        assert_eq!(format_runtime(None), "-");
    }

    #[test]
    fn test_genre_names_joined_in_order() {
        let genres = vec![Genre::new(28, "Action"), Genre::new(878, "Science Fiction")];
        assert_eq!(genre_names(&genres), "Action, Science Fiction");
        assert_eq!(genre_names(&[]), "");
    }
}
