use anyhow::Result;
use crate::store::{load_list, save_list, KeyValueStore};

/// Storage key holding the JSON array of recent search strings
pub const RECENT_SEARCHES_KEY: &str = "recentMovieSearches";

pub const MAX_RECENT_SEARCHES: usize = 5;

/// Most-recent-first list of past search queries, deduplicated and capped.
pub struct RecentSearches<S: KeyValueStore> {
    store: S,
    queries: Vec<String>,
}

impl<S: KeyValueStore> RecentSearches<S> {
    pub fn open(store: S) -> Result<Self> {
        let mut queries: Vec<String> = load_list(&store, RECENT_SEARCHES_KEY)?;
        queries.truncate(MAX_RECENT_SEARCHES);
        Ok(Self { store, queries })
    }

    /// Put `query` at the front. Blank queries are ignored.
    pub fn record(&mut self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let mut next = vec![query.to_string()];
        next.extend(self.queries.iter().filter(|existing| *existing != query).cloned());
        next.truncate(MAX_RECENT_SEARCHES);

        save_list(&self.store, RECENT_SEARCHES_KEY, &next)?;
        self.queries = next;
        Ok(())
    }

    pub fn list(&self) -> &[String] {
        &self.queries
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(RECENT_SEARCHES_KEY)?;
        self.queries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_most_recent_first_and_capped() {
        let mut recent = RecentSearches::open(MemoryStore::new()).unwrap();
        for query in ["one", "two", "three", "four", "five", "six"] {
            recent.record(query).unwrap();
        }
        assert_eq!(recent.list(), &["six", "five", "four", "three", "two"]);
    }

    #[test]
    fn test_repeat_moves_to_front() {
        let mut recent = RecentSearches::open(MemoryStore::new()).unwrap();
        recent.record("matrix").unwrap();
        recent.record("alien").unwrap();
        recent.record("  matrix ").unwrap();
        assert_eq!(recent.list(), &["matrix", "alien"]);
    }

    #[test]
    fn test_blank_queries_ignored() {
        let store = Arc::new(MemoryStore::new());
        let mut recent = RecentSearches::open(store.clone()).unwrap();
        recent.record("   ").unwrap();
        assert!(recent.list().is_empty());
        assert_eq!(store.load(RECENT_SEARCHES_KEY).unwrap(), None);
    }

    #[test]
    fn test_reload_truncates_oversized_data() {
        let store = MemoryStore::new();
        store
            .save(RECENT_SEARCHES_KEY, r#"["a","b","c","d","e","f","g"]"#)
            .unwrap();
        let recent = RecentSearches::open(store).unwrap();
        assert_eq!(recent.list().len(), MAX_RECENT_SEARCHES);
        assert_eq!(recent.list()[0], "a");
    }

    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn load(&self, key: &str) -> Result<Option<String>> {
            self.0.load(key)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("read-only")
        }

        fn remove(&self, _key: &str) -> Result<()> {
            anyhow::bail!("read-only")
        }
    }

    #[test]
    fn test_failed_record_keeps_previous_list() {
        let inner = MemoryStore::new();
        inner.save(RECENT_SEARCHES_KEY, r#"["alien"]"#).unwrap();
        let mut recent = RecentSearches::open(ReadOnlyStore(inner)).unwrap();

        assert!(recent.record("matrix").is_err());
        assert_eq!(recent.list(), &["alien"]);
        assert!(recent.clear().is_err());
        assert_eq!(recent.list(), &["alien"]);
    }
}
