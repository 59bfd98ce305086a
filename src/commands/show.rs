//! Show command: fetch the full detail record for one Pokémon.

use crate::domain::{AppError, PokemonDetail};
use crate::ports::CatalogueSource;

/// Options for the show command.
#[derive(Debug, Clone)]
pub struct ShowOptions {
    /// Pokémon name as it appears in the catalogue.
    pub name: String,
}

pub fn execute<S: CatalogueSource>(
    source: &S,
    options: &ShowOptions,
) -> Result<PokemonDetail, AppError> {
    source.fetch_detail(&options.name)
}

/// Render a detail record as human-readable lines.
pub fn render_text(detail: &PokemonDetail) -> String {
    let mut lines = vec![
        format!("Name:   {}", detail.name),
        format!("ID:     {}", detail.id),
        format!("Height: {} m", detail.height_m()),
        format!("Weight: {} kg", detail.weight_kg()),
        format!("Types:  {}", detail.types.join(", ")),
    ];
    if let Some(sprite) = &detail.sprite {
        lines.push(format!("Sprite: {}", sprite));
    }
    lines.join("\n")
}
