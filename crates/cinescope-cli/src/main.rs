use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::browse::Category;
use commands::config::ConfigCommands;
use commands::favorites::FavoritesCommands;
use commands::{browse, clear, config, details, favorites, search, serve, AppContext};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "cinescope")]
#[command(about = "CineScope - browse movies from a TMDB-compatible API")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies from one of the curated categories
    Browse {
        #[arg(value_enum, default_value = "trending")]
        category: Category,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List the genres known upstream
    Genres,
    /// Popular movies in a genre
    Genre {
        id: u32,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search movies by title
    #[command(long_about = "Search movies by title. Non-empty queries are remembered; see 'cinescope recent'.")]
    Search {
        query: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one movie with its top-billed cast
    Details {
        id: u64,

        /// Also print the cast table
        #[arg(long)]
        cast: bool,
    },
    /// Movies recommended for, or similar to, a movie
    Related {
        id: u64,

        /// Use the "similar" list instead of recommendations
        #[arg(long)]
        similar: bool,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// A random pick from this week's top trending movies
    Featured {
        #[arg(long)]
        cast: bool,
    },
    /// Manage favorite movies
    Favorites {
        #[command(subcommand)]
        cmd: FavoritesCommands,
    },
    /// Show recent searches (newest first)
    Recent,
    /// Manage configuration and the stored API key
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
    /// Clear favorites, recent searches, or the stored API key
    Clear {
        /// Clear everything below
        #[arg(long, action = ArgAction::SetTrue)]
        all: bool,

        #[arg(long, action = ArgAction::SetTrue)]
        favorites: bool,

        #[arg(long, action = ArgAction::SetTrue)]
        recent: bool,

        #[arg(long, action = ArgAction::SetTrue)]
        credentials: bool,
    },
    /// Run the HTTP API
    #[command(long_about = "Run the HTTP API that proxies and normalizes upstream movie data. Binds to server.bind from config.toml (or CINESCOPE_BIND) unless --bind is given.")]
    Serve {
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Send logs to a daily-rotated file instead of stderr (defaults to the logs directory)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        log_file: Option<Option<PathBuf>>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // `serve` needs the resolved paths before logging starts
    let (serve_ctx, log_file) = match &cli.command {
        Commands::Serve { log_file, .. } => {
            let ctx = AppContext::load()?;
            let log_file = log_file
                .clone()
                .map(|path| path.unwrap_or_else(|| ctx.paths.server_log_file()));
            (Some(ctx), log_file)
        }
        _ => (None, None),
    };

    logging::init_logging(cli.verbose, cli.quiet, log_file).map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command {
        Commands::Browse { category, page } => browse::run_browse(category, page, &output).await,
        Commands::Genres => browse::run_genres(&output).await,
        Commands::Genre { id, page } => browse::run_genre(id, page, &output).await,
        Commands::Search { query, page } => search::run_search(&query, page, &output).await,
        Commands::Details { id, cast } => details::run_details(id, cast, &output).await,
        Commands::Related { id, similar, page } => browse::run_related(id, similar, page, &output).await,
        Commands::Featured { cast } => details::run_featured(cast, &output).await,
        Commands::Favorites { cmd } => favorites::run_favorites(cmd, &output).await,
        Commands::Recent => search::run_recent(&output).await,
        Commands::Config { cmd } => config::run_config(cmd, &output).await,
        Commands::Clear { all, favorites, recent, credentials } => {
            clear::run_clear(all, favorites, recent, credentials, &output).await
        }
        Commands::Serve { bind, .. } => match serve_ctx {
            Some(ctx) => serve::run_serve(ctx, bind, &output).await,
            None => Err(eyre!("Server context was not initialised")),
        },
    };

    if let Err(e) = &result {
        if !output.is_human() {
            output.error(e.to_string());
        }
    }
    result
}
