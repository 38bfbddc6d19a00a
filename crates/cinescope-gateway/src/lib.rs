pub mod cache;
pub mod error;
pub mod genres;
pub mod http;
pub mod images;
pub mod tmdb;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use cache::{CacheHint, ResponseCache};
pub use error::GatewayError;
pub use genres::{genre_name, label_for_genre, resolve_genres};
pub use http::ReqwestFetcher;
pub use images::{ImageSize, ImageUrlBuilder};
pub use tmdb::client::featured_index;
pub use tmdb::{GatewaySettings, TmdbGateway, FEATURED_POOL_SIZE, MAX_CAST_MEMBERS};
pub use traits::{HttpFetch, UpstreamResponse};
