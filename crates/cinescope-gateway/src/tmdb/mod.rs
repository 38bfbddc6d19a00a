pub mod api;
pub mod client;

pub use client::{GatewaySettings, TmdbGateway, FEATURED_POOL_SIZE, MAX_CAST_MEMBERS};
