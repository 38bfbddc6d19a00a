use anyhow::{anyhow, Result};
use cinescope_config::PathManager;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// String key/value persistence used by the client-state stores.
///
/// Mirrors what a browser's local storage offers, so the stores can run on
/// top of files, memory, or anything else with the same shape.
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key under a directory
#[derive(Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_paths(path_manager: &PathManager) -> Self {
        Self::new(path_manager.store_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("Store miss: {} (file does not exist)", key);
            return Ok(None);
        }

        // Only a missing file counts as empty
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read store file for {}: {}", key, e))?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);

        // Temp file + rename: the key file always holds a complete document
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .map_err(|e| anyhow!("Failed to write store file for {}: {}", key, e))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| anyhow!("Failed to replace store file for {}: {}", key, e))?;
        debug!("Store saved: {}", key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// Volatile store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| anyhow!("Memory store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| anyhow!("Memory store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| anyhow!("Memory store lock poisoned"))?;
        values.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Load a JSON array stored under `key`. Missing or corrupt data yields an empty list.
pub(crate) fn load_list<S, T>(store: &S, key: &str) -> Result<Vec<T>>
where
    S: KeyValueStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let Some(content) = store.load(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<T>>(&content) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!("Stored data for {} is corrupt: {}. Starting empty.", key, e);
            Ok(Vec::new())
        }
    }
}

pub(crate) fn save_list<S, T>(store: &S, key: &str, items: &[T]) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: serde::Serialize,
{
    let json = serde_json::to_string(items)?;
    store.save(key, &json)
}
