pub mod cast;
pub mod genre;
pub mod movie;
pub mod pagination;
pub mod production;
pub mod search;

pub use cast::CastMember;
pub use genre::Genre;
pub use movie::{Movie, MovieDetails};
pub use pagination::PaginatedResponse;
pub use production::{ProductionCompany, ProductionCountry, SpokenLanguage};
pub use search::{SearchProxyMovie, SearchProxyResponse};
