//! Upstream catalogue port definition.

use crate::domain::{AppError, Catalogue, PokemonDetail};

/// Port for the upstream Pokémon catalogue collaborator.
pub trait CatalogueSource {
    /// Fetch one catalogue snapshot, in upstream order.
    fn fetch_catalogue(&self) -> Result<Catalogue, AppError>;

    /// Fetch the full detail record for a Pokémon by name.
    fn fetch_detail(&self, name: &str) -> Result<PokemonDetail, AppError>;
}
