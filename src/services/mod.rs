mod cached_source;
mod detail_retry;
mod pokeapi_http;

pub use cached_source::{CachedCatalogueSource, CatalogueSnapshot};
pub use detail_retry::RetryingCatalogueSource;
pub use pokeapi_http::HttpCatalogueSource;
