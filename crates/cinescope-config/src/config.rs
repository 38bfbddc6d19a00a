use crate::credentials::CredentialStore;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

// Placeholder written into freshly generated config files
const API_KEY_PLACEHOLDER: &str = "YOUR_TMDB_API_KEY";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be an http(s) URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
    #[error("server.bind is not a valid socket address: '{0}'")]
    InvalidBind(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Overrides the directory favorites and recent searches are persisted in
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config file when it exists, otherwise start from defaults.
    /// Environment variables are applied on top in both cases.
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_env(|name| std::env::var(name).ok());
    }

    /// Apply `TMDB_API_KEY`, `TMDB_BASE_URL`, `TMDB_IMAGE_BASE_URL` and `CINESCOPE_BIND`
    /// from the given lookup. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("TMDB_API_KEY") {
            self.tmdb.api_key = Some(key);
        }
        if let Some(url) = non_empty("TMDB_BASE_URL") {
            self.tmdb.base_url = url;
        }
        if let Some(url) = non_empty("TMDB_IMAGE_BASE_URL") {
            self.tmdb.image_base_url = url;
        }
        if let Some(bind) = non_empty("CINESCOPE_BIND") {
            self.server.bind = bind;
        }
    }

    /// Fill the API key from the credential store when neither the file nor the environment set one
    pub fn apply_credentials(&mut self, credentials: &CredentialStore) {
        if self.api_key().is_none() {
            if let Some(key) = credentials.get_tmdb_api_key() {
                self.tmdb.api_key = Some(key.clone());
            }
        }
    }

    /// The configured API key, ignoring blanks and the generated placeholder
    pub fn api_key(&self) -> Option<&str> {
        self.tmdb
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != API_KEY_PLACEHOLDER)
    }

    pub fn is_tmdb_configured(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("tmdb.base_url", &self.tmdb.base_url),
            ("tmdb.image_base_url", &self.tmdb.image_base_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }

        self.bind_addr()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.server.bind.clone()))
    }

    /// A starter config with a placeholder key, written by `config init`
    pub fn template() -> Self {
        Self {
            tmdb: TmdbConfig {
                api_key: Some(API_KEY_PLACEHOLDER.to_string()),
                ..TmdbConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            tmdb: TmdbConfig {
                api_key: Some("test_key".to_string()),
                ..TmdbConfig::default()
            },
            server: ServerConfig {
                bind: "0.0.0.0:8080".to_string(),
            },
            storage: StorageConfig::default(),
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.api_key(), Some("test_key"));
        assert_eq!(loaded.server.bind, "0.0.0.0:8080");
        assert_eq!(loaded.tmdb.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.image_base_url, "https://image.tmdb.org/t/p");
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config: Config = toml::from_str(
            r#"
            [tmdb]
            api_key = "from_file"
            base_url = "http://localhost:9000/3"
            "#,
        )
        .unwrap();

        config.apply_env(env_from(&[
            ("TMDB_API_KEY", "from_env"),
            ("TMDB_IMAGE_BASE_URL", "http://img.local/t/p"),
        ]));

        assert_eq!(config.api_key(), Some("from_env"));
        assert_eq!(config.tmdb.base_url, "http://localhost:9000/3");
        assert_eq!(config.tmdb.image_base_url, "http://img.local/t/p");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env(env_from(&[("TMDB_API_KEY", "  "), ("TMDB_BASE_URL", "")]));
        assert!(config.api_key().is_none());
        assert_eq!(config.tmdb.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_placeholder_key_is_not_configured() {
        let config = Config::template();
        assert!(!config.is_tmdb_configured());
    }

    #[test]
    fn test_credentials_fill_missing_key_only() {
        let mut creds = CredentialStore::new(PathBuf::from("/tmp/cinescope-test-creds"));
        creds.set_tmdb_api_key("stored_key".to_string());

        let mut config = Config::default();
        config.apply_credentials(&creds);
        assert_eq!(config.api_key(), Some("stored_key"));

        let mut config = Config::default();
        config.tmdb.api_key = Some("explicit".to_string());
        config.apply_credentials(&creds);
        assert_eq!(config.api_key(), Some("explicit"));
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.tmdb.base_url = "ftp://example.com".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUrl {
                field: "tmdb.base_url",
                value: "ftp://example.com".to_string(),
            })
        );

        config.tmdb.base_url = DEFAULT_BASE_URL.to_string();
        config.server.bind = "not-an-address".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBind(_))));
    }
}
