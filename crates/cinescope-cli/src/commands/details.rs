use super::AppContext;
use crate::output::Output;
use crate::render;
use cinescope_models::MovieDetails;
use color_eyre::eyre::eyre;
use color_eyre::Result;

fn print_details(details: &MovieDetails, show_cast: bool, output: &Output) -> Result<()> {
    if !output.is_human() {
        return output.data(details).map_err(|e| eyre!("{}", e));
    }

    output.println(render::details_table(details).to_string());
    if show_cast && !details.cast().is_empty() {
        output.println(render::cast_table(details).to_string());
    }
    Ok(())
}

pub async fn run_details(movie_id: u64, show_cast: bool, output: &Output) -> Result<()> {
    let gateway = AppContext::load()?.require_gateway()?;

    // Failures are already logged by the gateway
    match gateway.get_movie_details(movie_id).await {
        Some(details) => print_details(&details, show_cast, output),
        None => Err(eyre!("Movie {} could not be loaded", movie_id)),
    }
}

pub async fn run_featured(show_cast: bool, output: &Output) -> Result<()> {
    let gateway = AppContext::load()?.require_gateway()?;

    match gateway.get_featured_movie().await {
        Some(details) => print_details(&details, show_cast, output),
        None => {
            output.warn("No featured movie available right now");
            Ok(())
        }
    }
}
