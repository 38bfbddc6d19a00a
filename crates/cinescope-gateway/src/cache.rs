use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

const HOUR: u64 = 60 * 60;
const DAY: u64 = 24 * HOUR;

/// Revalidate-after hint attached to every upstream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheHint {
    /// `configuration`: image base URLs and sizes barely ever change
    Configuration,
    /// Listings, genres, details, recommendations and similar movies
    Listing,
    /// Title searches
    Search,
}

impl CacheHint {
    pub fn ttl(self) -> Duration {
        match self {
            CacheHint::Configuration => Duration::from_secs(7 * DAY),
            CacheHint::Listing => Duration::from_secs(DAY),
            CacheHint::Search => Duration::from_secs(HOUR),
        }
    }
}

struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// In-process TTL cache of successful upstream bodies, keyed by request URL.
///
/// Values are always re-derived from upstream on a miss, so a stale or evicted
/// entry only costs a request.
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries,
        }
    }

    pub fn get(&self, url: &str) -> Option<String> {
        self.get_at(url, Instant::now())
    }

    pub fn insert(&self, url: &str, body: String, hint: CacheHint) {
        self.insert_at(url, body, hint, Instant::now());
    }

    fn get_at(&self, url: &str, now: Instant) -> Option<String> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(url) {
            Some(entry) if entry.expires_at > now => Some(entry.body.clone()),
            Some(_) => {
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    fn insert_at(&self, url: &str, body: String, hint: CacheHint, now: Instant) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        if entries.len() >= self.max_entries && !entries.contains_key(url) {
            entries.retain(|_, entry| entry.expires_at > now);
            if entries.len() >= self.max_entries {
                debug!(max_entries = self.max_entries, "Response cache full, clearing");
                entries.clear();
            }
        }

        entries.insert(
            url.to_string(),
            CacheEntry {
                body,
                expires_at: now + hint.ttl(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_lifetimes() {
        assert_eq!(CacheHint::Configuration.ttl(), Duration::from_secs(604_800));
        assert_eq!(CacheHint::Listing.ttl(), Duration::from_secs(86_400));
        assert_eq!(CacheHint::Search.ttl(), Duration::from_secs(3_600));
    }

    #[test]
    fn test_entry_expires_after_hint() {
        let cache = ResponseCache::new(8);
        let start = Instant::now();
        cache.insert_at("u", "body".to_string(), CacheHint::Search, start);

        assert_eq!(cache.get_at("u", start + Duration::from_secs(60)), Some("body".to_string()));
        assert_eq!(cache.get_at("u", start + Duration::from_secs(3_601)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_full_cache_drops_expired_first() {
        let cache = ResponseCache::new(2);
        let start = Instant::now();
        cache.insert_at("search", "s".to_string(), CacheHint::Search, start);
        cache.insert_at("config", "c".to_string(), CacheHint::Configuration, start);

        let later = start + Duration::from_secs(2 * 3_600);
        cache.insert_at("listing", "l".to_string(), CacheHint::Listing, later);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_at("config", later), Some("c".to_string()));
        assert_eq!(cache.get_at("listing", later), Some("l".to_string()));
    }
}
