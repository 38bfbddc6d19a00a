use super::{prompts, AppContext};
use crate::output::Output;
use clap::Subcommand;
use cinescope_config::{Config, CredentialStore, PathManager};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration (API key masked)
    Show {
        /// Print the API key unmasked
        #[arg(long)]
        full: bool,
    },
    /// Store the TMDB API key in the credentials file
    #[command(long_about = "Store the TMDB API key in credentials.toml. When --key is omitted the key is read from a masked prompt. TMDB_API_KEY and a key in config.toml both take precedence over the stored key.")]
    ApiKey {
        #[arg(long)]
        key: Option<String>,
    },
    /// Write a starter config.toml
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}

pub async fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(full, output),
        ConfigCommands::ApiKey { key } => configure_api_key(key, output),
        ConfigCommands::Init { force } => init_config(force, output),
    }
}

fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    if s.len() <= 4 {
        return "*".repeat(s.len());
    }
    format!("{}***{}", &s[..2], &s[s.len() - 2..])
}

fn show_config(full: bool, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let config = &ctx.config;
    let config_file = ctx.paths.config_file();

    let key_display = match config.api_key() {
        Some(key) if full => key.to_string(),
        Some(key) => mask_string(key),
        None => "<not set>".to_string(),
    };
    let store_dir = config
        .storage
        .data_dir
        .clone()
        .unwrap_or_else(|| ctx.paths.store_dir());

    if !output.is_human() {
        return output
            .data(&json!({
                "config_file": config_file.display().to_string(),
                "config_file_exists": config_file.exists(),
                "tmdb": {
                    "api_key": key_display,
                    "base_url": config.tmdb.base_url,
                    "image_base_url": config.tmdb.image_base_url,
                },
                "server": { "bind": config.server.bind },
                "storage": { "data_dir": store_dir.display().to_string() },
            }))
            .map_err(|e| eyre!("{}", e));
    }

    if output.is_quiet() {
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!(
            "No config file at {}; showing defaults and environment overrides",
            config_file.display()
        ));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Config file"), Cell::new(config_file.display())]);
    table.add_row(vec![Cell::new("TMDB API key"), Cell::new(key_display)]);
    table.add_row(vec![Cell::new("TMDB base URL"), Cell::new(&config.tmdb.base_url)]);
    table.add_row(vec![Cell::new("Image base URL"), Cell::new(&config.tmdb.image_base_url)]);
    table.add_row(vec![Cell::new("Server bind"), Cell::new(&config.server.bind)]);
    table.add_row(vec![Cell::new("Data directory"), Cell::new(store_dir.display())]);
    output.println(table.to_string());

    let mut credentials = CredentialStore::new(ctx.paths.credentials_file());
    if credentials.load().is_ok() {
        if let Some(saved_at) = credentials.get_tmdb_api_key_saved_at() {
            output.println(
                format!("Stored API key saved {}", saved_at.format("%Y-%m-%d %H:%M UTC"))
                    .bright_black()
                    .to_string(),
            );
        }
    }
    Ok(())
}

fn configure_api_key(key_arg: Option<String>, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create configuration directories: {}", e))?;

    let key = match key_arg {
        Some(key) => key.trim().to_string(),
        None => prompts::prompt_secret("TMDB API key (v3)")?,
    };
    if key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let mut credentials = CredentialStore::new(path_manager.credentials_file());
    credentials
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    credentials.set_tmdb_api_key(key);
    credentials
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success(format!(
        "API key saved to {}",
        path_manager.credentials_file().display()
    ));
    Ok(())
}

fn init_config(force: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if config_file.exists()
        && !force
        && !prompts::prompt_yes_no(
            &format!("{} exists. Overwrite?", config_file.display()),
            false,
        )?
    {
        output.info("Left existing configuration untouched");
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create configuration directories: {}", e))?;
    Config::template()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote {}", config_file.display()));
    output.info("Replace YOUR_TMDB_API_KEY with your key, or run 'cinescope config api-key'");
    Ok(())
}
