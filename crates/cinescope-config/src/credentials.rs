use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
struct CredentialsData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// Secrets kept out of `config.toml` (currently only the TMDB API key).
pub struct CredentialStore {
    path: PathBuf,
    credentials: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            credentials: HashMap::new(),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let creds_data: CredentialsData = toml::from_str(&content)?;
            self.credentials = creds_data.data;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let creds_data = CredentialsData {
            data: self.credentials.clone(),
        };
        let content = toml::to_string_pretty(&creds_data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.credentials.get(key)
    }

    pub fn set(&mut self, key: String, value: String) {
        self.credentials.insert(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.credentials.remove(key);
    }

    pub fn get_tmdb_api_key(&self) -> Option<&String> {
        self.get("tmdb_api_key").filter(|k| !k.is_empty())
    }

    /// Store the API key and stamp when it was set
    pub fn set_tmdb_api_key(&mut self, key: String) {
        self.set("tmdb_api_key".to_string(), key);
        self.set("tmdb_api_key_saved_at".to_string(), Utc::now().to_rfc3339());
    }

    pub fn get_tmdb_api_key_saved_at(&self) -> Option<DateTime<Utc>> {
        self.get("tmdb_api_key_saved_at")
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn clear_tmdb_api_key(&mut self) {
        self.remove("tmdb_api_key");
        self.remove("tmdb_api_key_saved_at");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_credential_store_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        let mut store = CredentialStore::new(path.clone());
        store.set_tmdb_api_key("test_key".to_string());
        store.save().unwrap();

        let mut loaded_store = CredentialStore::new(path);
        loaded_store.load().unwrap();
        assert_eq!(loaded_store.get_tmdb_api_key(), Some(&"test_key".to_string()));

        let saved_at = loaded_store.get_tmdb_api_key_saved_at().unwrap();
        assert!((Utc::now() - saved_at).num_seconds().abs() < 5);
    }

    #[test]
    fn test_credential_store_clear_key() {
        let mut store = CredentialStore::new(PathBuf::from("/tmp/test"));
        store.set_tmdb_api_key("abc".to_string());
        store.set("other".to_string(), "value".to_string());

        store.clear_tmdb_api_key();
        assert_eq!(store.get_tmdb_api_key(), None);
        assert_eq!(store.get_tmdb_api_key_saved_at(), None);
        assert_eq!(store.get("other"), Some(&"value".to_string()));
    }

    #[test]
    fn test_empty_key_is_absent() {
        let mut store = CredentialStore::new(PathBuf::from("/tmp/test"));
        store.set("tmdb_api_key".to_string(), String::new());
        assert_eq!(store.get_tmdb_api_key(), None);
    }
}
