use cinescope_core::{FavoritesStore, KeyValueStore};
use cinescope_gateway::TmdbGateway;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedFavorites = Arc<Mutex<FavoritesStore<Arc<dyn KeyValueStore>>>>;

#[derive(Clone)]
pub struct AppState {
    pub gateway: TmdbGateway,
    pub favorites: SharedFavorites,
}

impl AppState {
    pub fn new(gateway: TmdbGateway, favorites: FavoritesStore<Arc<dyn KeyValueStore>>) -> Self {
        Self {
            gateway,
            favorites: Arc::new(Mutex::new(favorites)),
        }
    }
}
