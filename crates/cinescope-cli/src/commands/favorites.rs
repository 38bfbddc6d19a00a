use super::AppContext;
use crate::output::Output;
use crate::render;
use clap::Subcommand;
use cinescope_core::{FavoritesStore, KeyValueStore};
use cinescope_models::Movie;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;

#[derive(Subcommand)]
pub enum FavoritesCommands {
    /// List favorite movie ids
    List {
        /// Look up each favorite's details (one upstream call pair per movie)
        #[arg(long)]
        details: bool,
    },
    /// Add a movie to favorites
    Add { id: u64 },
    /// Remove a movie from favorites
    Remove { id: u64 },
    /// Add the movie if absent, remove it otherwise
    Toggle { id: u64 },
}

fn open_favorites(ctx: &AppContext) -> Result<FavoritesStore<Arc<dyn KeyValueStore>>> {
    FavoritesStore::open(ctx.store()).map_err(|e| eyre!("Failed to open favorites: {}", e))
}

pub async fn run_favorites(cmd: FavoritesCommands, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let mut favorites = open_favorites(&ctx)?;

    match cmd {
        FavoritesCommands::List { details } => list_favorites(&ctx, &favorites, details, output).await,
        FavoritesCommands::Add { id } => {
            if favorites.add(id).map_err(|e| eyre!("{}", e))? {
                output.success(format!("Added {} to favorites", id));
            } else {
                output.info(format!("{} is already a favorite", id));
            }
            Ok(())
        }
        FavoritesCommands::Remove { id } => {
            if favorites.remove(id).map_err(|e| eyre!("{}", e))? {
                output.success(format!("Removed {} from favorites", id));
            } else {
                output.info(format!("{} was not a favorite", id));
            }
            Ok(())
        }
        FavoritesCommands::Toggle { id } => {
            let now_favorite = favorites.toggle(id).map_err(|e| eyre!("{}", e))?;
            if now_favorite {
                output.success(format!("Added {} to favorites", id));
            } else {
                output.success(format!("Removed {} from favorites", id));
            }
            Ok(())
        }
    }
}

async fn list_favorites(
    ctx: &AppContext,
    favorites: &FavoritesStore<Arc<dyn KeyValueStore>>,
    with_details: bool,
    output: &Output,
) -> Result<()> {
    if favorites.is_empty() {
        if output.is_human() {
            output.info("No favorites yet");
            return Ok(());
        }
        return output.data(&json!({ "favorites": [] })).map_err(|e| eyre!("{}", e));
    }

    if !with_details {
        if output.is_human() {
            for id in favorites.list() {
                output.println(id.to_string());
            }
            return Ok(());
        }
        return output
            .data(&json!({ "favorites": favorites.list() }))
            .map_err(|e| eyre!("{}", e));
    }

    let gateway = ctx.require_gateway()?;
    let lookups = favorites.list().iter().map(|id| gateway.get_movie_details(*id));
    let movies: Vec<Movie> = join_all(lookups)
        .await
        .into_iter()
        .flatten()
        .map(|details| details.movie)
        .collect();

    let missing = favorites.len() - movies.len();
    if output.is_human() {
        output.println(render::movie_table(&movies).to_string());
        if missing > 0 {
            output.warn(format!("{} favorite(s) could not be loaded", missing));
        }
        Ok(())
    } else {
        output
            .data(&json!({ "favorites": favorites.list(), "movies": movies }))
            .map_err(|e| eyre!("{}", e))
    }
}
