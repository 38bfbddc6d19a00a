use super::AppContext;
use crate::output::Output;
use crate::render;
use clap::ValueEnum;
use cinescope_gateway::label_for_genre;
use cinescope_models::{Movie, PaginatedResponse};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Trending,
    TopRated,
    Upcoming,
    NowPlaying,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Trending => "Trending this week",
            Category::TopRated => "Top rated",
            Category::Upcoming => "Upcoming",
            Category::NowPlaying => "Now playing",
        }
    }
}

/// Print a movie page under a heading, or emit it as JSON
pub fn print_page(title: &str, page: &PaginatedResponse<Movie>, output: &Output) -> Result<()> {
    if !output.is_human() {
        return output.data(page).map_err(|e| eyre!("{}", e));
    }

    output.println(format!("\n{}", title.bright_cyan().bold()));
    if page.is_empty() {
        output.info("No movies found");
        return Ok(());
    }
    output.println(render::movie_table(&page.results).to_string());
    output.println(render::page_footer(page).bright_black().to_string());
    Ok(())
}

pub async fn run_browse(category: Category, page: u32, output: &Output) -> Result<()> {
    let gateway = AppContext::load()?.require_gateway()?;

    let movies = match category {
        Category::Trending => gateway.get_trending_movies(page).await,
        Category::TopRated => gateway.get_top_rated_movies(page).await,
        Category::Upcoming => gateway.get_upcoming_movies(page).await,
        Category::NowPlaying => gateway.get_now_playing_movies(page).await,
    }?;

    print_page(category.title(), &movies, output)
}

pub async fn run_genres(output: &Output) -> Result<()> {
    let gateway = AppContext::load()?.require_gateway()?;
    let genres = gateway.get_genres().await?;

    if output.is_human() {
        output.println(render::genre_table(&genres).to_string());
        Ok(())
    } else {
        output.data(&genres).map_err(|e| eyre!("{}", e))
    }
}

pub async fn run_genre(genre_id: u32, page: u32, output: &Output) -> Result<()> {
    let gateway = AppContext::load()?.require_gateway()?;
    let movies = gateway.get_movies_by_genre(genre_id, page).await?;
    let label = label_for_genre(genre_id);

    if output.is_human() {
        print_page(&label, &movies, output)
    } else {
        output
            .data(&json!({ "label": label, "page": movies }))
            .map_err(|e| eyre!("{}", e))
    }
}

pub async fn run_related(movie_id: u64, similar: bool, page: u32, output: &Output) -> Result<()> {
    let gateway = AppContext::load()?.require_gateway()?;

    let (title, movies) = if similar {
        ("Similar movies", gateway.get_similar_movies(movie_id, page).await?)
    } else {
        ("Recommended movies", gateway.get_recommended_movies(movie_id, page).await?)
    };

    print_page(title, &movies, output)
}
