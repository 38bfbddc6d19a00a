use super::AppContext;
use crate::output::Output;
use cinescope_core::FavoritesStore;
use cinescope_server::AppState;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::net::SocketAddr;
use tracing::{info, warn};

pub async fn run_serve(ctx: AppContext, bind: Option<String>, output: &Output) -> Result<()> {
    let addr: SocketAddr = match bind {
        Some(bind) => bind
            .parse()
            .map_err(|_| eyre!("--bind is not a valid socket address: '{}'", bind))?,
        None => ctx.config.bind_addr()?,
    };

    if !ctx.config.is_tmdb_configured() {
        warn!("TMDB API key is not configured; movie endpoints will report a configuration error");
    }

    let favorites = FavoritesStore::open(ctx.store())
        .map_err(|e| eyre!("Failed to open favorites: {}", e))?;
    let state = AppState::new(ctx.gateway(), favorites);

    info!(bind = %addr, base_url = %ctx.config.tmdb.base_url, "Starting movie data server");
    output.info(format!("Serving on http://{}", addr));

    cinescope_server::serve(state, addr)
        .await
        .map_err(|e| eyre!("Server error: {}", e))
}
