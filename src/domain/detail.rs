//! Detail record served by the per-Pokémon endpoint.

use serde::Serialize;

/// Full detail record for one Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Height in decimetres, as reported upstream.
    pub height: u32,
    /// Weight in hectograms, as reported upstream.
    pub weight: u32,
    /// URL of the default front sprite, when the upstream has one.
    pub sprite: Option<String>,
    /// Type names in upstream slot order.
    pub types: Vec<String>,
}

impl PokemonDetail {
    /// Height in metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}
