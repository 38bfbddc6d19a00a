pub mod browse;
pub mod clear;
pub mod config;
pub mod details;
pub mod favorites;
pub mod prompts;
pub mod search;
pub mod serve;

use cinescope_config::{Config, CredentialStore, PathManager};
use cinescope_core::{FileStore, KeyValueStore};
use cinescope_gateway::TmdbGateway;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::sync::Arc;
use tracing::debug;

/// Resolved configuration shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

impl AppContext {
    /// config.toml, then env overrides, then the stored API key when nothing else set one
    pub fn load() -> Result<Self> {
        Self::load_from(PathManager::default())
    }

    pub fn load_from(paths: PathManager) -> Result<Self> {
        let config_file = paths.config_file();
        let mut config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

        let mut credentials = CredentialStore::new(paths.credentials_file());
        credentials
            .load()
            .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
        config.apply_credentials(&credentials);

        config.validate()?;
        debug!(
            config_file = %config_file.display(),
            api_key_set = config.is_tmdb_configured(),
            "Configuration loaded"
        );

        Ok(Self { paths, config })
    }

    pub fn gateway(&self) -> TmdbGateway {
        TmdbGateway::from_config(&self.config)
    }

    /// Gateway for commands that cannot do anything useful without a key
    pub fn require_gateway(&self) -> Result<TmdbGateway> {
        if !self.config.is_tmdb_configured() {
            return Err(eyre!(
                "TMDB API key is not configured. Run 'cinescope config api-key' or set TMDB_API_KEY"
            ));
        }
        Ok(self.gateway())
    }

    /// Backing store for favorites and recent searches
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        let store = match &self.config.storage.data_dir {
            Some(dir) => FileStore::new(dir.clone()),
            None => FileStore::from_paths(&self.paths),
        };
        Arc::new(store)
    }
}
