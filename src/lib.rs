//! dexter: fetch, filter, and inspect the Pokémon catalogue from the command line.
//!
//! The upstream collaborator sits behind the [`ports::CatalogueSource`] seam;
//! the stock wiring is HTTP → single detail retry → fetch-and-cache.

pub mod commands;
pub mod domain;
pub mod ports;
pub mod services;

use std::time::Duration;

use services::{CachedCatalogueSource, HttpCatalogueSource, RetryingCatalogueSource};

pub use commands::list::{ListEntry, ListOptions, ListReport};
pub use commands::show::ShowOptions;
pub use domain::{AppError, CachePolicy, Catalogue, CatalogueItem, DexConfig, PokemonDetail};

/// Fetch the catalogue and return the entries matching the query.
pub fn list(config: &DexConfig, options: &ListOptions) -> Result<ListReport, AppError> {
    let policy = match options.cache {
        Some(policy) => policy,
        None => config.cache.policy()?,
    };
    let source = CachedCatalogueSource::new(upstream(config)?, policy);
    commands::list::execute(&source, options)
}

/// Fetch the full detail record for one Pokémon.
pub fn show(config: &DexConfig, options: &ShowOptions) -> Result<PokemonDetail, AppError> {
    let source = upstream(config)?;
    commands::show::execute(&source, options)
}

fn upstream(
    config: &DexConfig,
) -> Result<RetryingCatalogueSource<HttpCatalogueSource>, AppError> {
    let http = HttpCatalogueSource::new(&config.api)?;
    Ok(RetryingCatalogueSource::new(
        http,
        Duration::from_millis(config.api.retry_delay_ms),
    ))
}
