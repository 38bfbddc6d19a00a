pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{Config, ConfigError, ServerConfig, StorageConfig, TmdbConfig, DEFAULT_BASE_URL, DEFAULT_BIND, DEFAULT_IMAGE_BASE_URL};
pub use credentials::CredentialStore;
pub use paths::{PathManager, container_base_path};
