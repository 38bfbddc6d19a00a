pub mod favorites;
pub mod recent;
pub mod store;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use recent::{RecentSearches, MAX_RECENT_SEARCHES, RECENT_SEARCHES_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
