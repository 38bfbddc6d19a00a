use super::AppContext;
use crate::output::Output;
use cinescope_config::CredentialStore;
use cinescope_core::{FavoritesStore, RecentSearches};
use color_eyre::eyre::eyre;
use color_eyre::Result;

pub async fn run_clear(all: bool, favorites: bool, recent: bool, credentials: bool, output: &Output) -> Result<()> {
    if !(all || favorites || recent || credentials) {
        output.warn("No clear option specified. Use --favorites, --recent, --credentials, or --all");
        output.println("\nExample: cinescope clear --recent");
        return Ok(());
    }

    let ctx = AppContext::load()?;

    if all || favorites {
        let mut store = FavoritesStore::open(ctx.store()).map_err(|e| eyre!("{}", e))?;
        let count = store.len();
        store
            .clear()
            .map_err(|e| eyre!("Failed to clear favorites: {}", e))?;
        output.success(format!("Cleared {} favorite(s)", count));
    }

    if all || recent {
        let mut store = RecentSearches::open(ctx.store()).map_err(|e| eyre!("{}", e))?;
        store
            .clear()
            .map_err(|e| eyre!("Failed to clear recent searches: {}", e))?;
        output.success("Cleared recent searches");
    }

    if all || credentials {
        clear_credentials(&ctx, output)?;
    }

    Ok(())
}

fn clear_credentials(ctx: &AppContext, output: &Output) -> Result<()> {
    let credentials_file = ctx.paths.credentials_file();
    if !credentials_file.exists() {
        output.info("No credentials file found to clear");
        return Ok(());
    }

    let mut store = CredentialStore::new(credentials_file.clone());
    store
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    store.clear_tmdb_api_key();
    store
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success(format!("Cleared stored API key: {}", credentials_file.display()));
    Ok(())
}
