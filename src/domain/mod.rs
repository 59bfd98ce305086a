pub mod catalogue;
pub mod config;
pub mod detail;
pub mod error;

pub use catalogue::{Catalogue, CatalogueItem, extract_id};
pub use config::{ApiConfig, CacheConfig, CachePolicy, DexConfig};
pub use detail::PokemonDetail;
pub use error::AppError;
