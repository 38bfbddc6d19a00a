use super::browse::print_page;
use super::AppContext;
use crate::output::Output;
use cinescope_core::RecentSearches;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::warn;

pub async fn run_search(query: &str, page: u32, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let gateway = ctx.require_gateway()?;

    match RecentSearches::open(ctx.store()) {
        Ok(mut recent) => {
            if let Err(e) = recent.record(query) {
                warn!(error = %e, "Failed to record recent search");
            }
        }
        Err(e) => warn!(error = %e, "Failed to open recent searches"),
    }

    let results = gateway.search_movies(query, page).await?;
    print_page(&format!("Results for \"{}\"", query.trim()), &results, output)
}

pub async fn run_recent(output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let recent = RecentSearches::open(ctx.store()).map_err(|e| eyre!("{}", e))?;

    if !output.is_human() {
        return output.data(&recent.list()).map_err(|e| eyre!("{}", e));
    }

    if recent.list().is_empty() {
        output.info("No recent searches");
        return Ok(());
    }
    for (i, query) in recent.list().iter().enumerate() {
        output.println(format!("{}. {}", i + 1, query));
    }
    Ok(())
}
