use anyhow::Result;
use crate::store::{load_list, save_list, KeyValueStore};
use tracing::info;

/// Storage key holding the JSON array of favorite movie ids
pub const FAVORITES_KEY: &str = "favorites";

/// The user's favorite movies, as an ordered list of movie ids.
///
/// Every mutation is written through to the injected store immediately.
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    ids: Vec<u64>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load the current favorites from `store`
    pub fn open(store: S) -> Result<Self> {
        let ids = load_list(&store, FAVORITES_KEY)?;
        let mut favorites = Self { store, ids: Vec::new() };
        // Older data may contain repeats
        for id in ids {
            if !favorites.ids.contains(&id) {
                favorites.ids.push(id);
            }
        }
        Ok(favorites)
    }

    /// Returns false when the id was already a favorite
    pub fn add(&mut self, id: u64) -> Result<bool> {
        if self.has(id) {
            return Ok(false);
        }
        let mut next = self.ids.clone();
        next.push(id);
        self.commit(next)?;
        info!(movie_id = id, "Added favorite");
        Ok(true)
    }

    /// Returns false when the id was not a favorite
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        if !self.has(id) {
            return Ok(false);
        }
        let next: Vec<u64> = self.ids.iter().copied().filter(|existing| *existing != id).collect();
        self.commit(next)?;
        info!(movie_id = id, "Removed favorite");
        Ok(true)
    }

    /// Add when absent, remove when present. Returns whether the id is now a favorite.
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        if self.has(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    pub fn has(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Favorites in the order they were added
    pub fn list(&self) -> &[u64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(FAVORITES_KEY)?;
        self.ids.clear();
        Ok(())
    }

    // In-memory state only changes once the store accepted the write
    fn commit(&mut self, next: Vec<u64>) -> Result<()> {
        save_list(&self.store, FAVORITES_KEY, &next)?;
        self.ids = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Memory store whose writes can be switched off
    #[derive(Default)]
    struct FailingStore {
        inner: MemoryStore,
        fail_writes: AtomicBool,
    }

    impl KeyValueStore for FailingStore {
        fn load(&self, key: &str) -> Result<Option<String>> {
            self.inner.load(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                anyhow::bail!("disk full");
            }
            self.inner.save(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                anyhow::bail!("disk full");
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut favorites = FavoritesStore::open(MemoryStore::new()).unwrap();
        assert!(favorites.add(603).unwrap());
        assert!(!favorites.add(603).unwrap());
        assert_eq!(favorites.list(), &[603]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = FavoritesStore::open(MemoryStore::new()).unwrap();
        favorites.add(1).unwrap();
        assert!(!favorites.remove(2).unwrap());
        assert!(favorites.remove(1).unwrap());
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut favorites = FavoritesStore::open(MemoryStore::new()).unwrap();
        assert!(favorites.toggle(42).unwrap());
        assert!(favorites.has(42));
        assert!(!favorites.toggle(42).unwrap());
        assert!(!favorites.has(42));
    }

    #[test]
    fn test_persisted_as_json_array() {
        let store = Arc::new(MemoryStore::new());
        let mut favorites = FavoritesStore::open(store.clone()).unwrap();
        favorites.add(3).unwrap();
        favorites.add(1).unwrap();
        favorites.add(2).unwrap();

        assert_eq!(store.load(FAVORITES_KEY).unwrap(), Some("[3,1,2]".to_string()));
    }

    #[test]
    fn test_survives_reload_from_disk() {
        let dir = TempDir::new().unwrap();
        {
            let mut favorites = FavoritesStore::open(FileStore::new(dir.path())).unwrap();
            favorites.add(11).unwrap();
            favorites.add(22).unwrap();
            favorites.remove(11).unwrap();
        }

        let reloaded = FavoritesStore::open(FileStore::new(dir.path())).unwrap();
        assert_eq!(reloaded.list(), &[22]);
    }

    #[test]
    fn test_duplicates_in_stored_data_collapse() {
        let store = MemoryStore::new();
        store.save(FAVORITES_KEY, "[5,5,7,5]").unwrap();
        let favorites = FavoritesStore::open(store).unwrap();
        assert_eq!(favorites.list(), &[5, 7]);
    }

    #[test]
    fn test_clear_removes_key() {
        let store = Arc::new(MemoryStore::new());
        let mut favorites = FavoritesStore::open(store.clone()).unwrap();
        favorites.add(9).unwrap();
        favorites.clear().unwrap();
        assert!(favorites.is_empty());
        assert_eq!(store.load(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn test_failed_write_leaves_state_untouched() {
        let store = Arc::new(FailingStore::default());
        let mut favorites = FavoritesStore::open(store.clone()).unwrap();
        favorites.add(1).unwrap();

        store.fail_writes.store(true, Ordering::SeqCst);
        assert!(favorites.add(7).is_err());
        assert!(!favorites.has(7));
        assert!(favorites.remove(1).is_err());
        assert!(favorites.has(1));
        assert!(favorites.clear().is_err());
        assert_eq!(favorites.list(), &[1]);

        store.fail_writes.store(false, Ordering::SeqCst);
        assert!(favorites.add(7).unwrap());
        assert_eq!(store.load(FAVORITES_KEY).unwrap(), Some("[1,7]".to_string()));
    }
}
