//! Assembled display entry for one pokemon

use lumidex_api::{EvolutionStage, Pokemon};
use lumidex_dex::{Type, query};

/// Everything the display layer needs for one pokemon, precomputed
#[derive(Debug, Clone)]
pub struct DexEntry {
    /// National dex id
    pub id: u32,

    /// Lowercase name
    pub name: String,

    /// Front sprite URL, when the API has one
    pub sprite: Option<String>,

    /// Parsed types in slot order (unrecognized type names are dropped)
    pub types: Vec<Type>,

    /// Super effective attacking types, in discovery order
    pub weaknesses: Vec<Type>,

    /// Advisory text for countering this pokemon
    pub counter_tips: String,

    /// Flattened evolution line, base species first
    pub evolution: Vec<EvolutionStage>,

    /// Moves available in the selected version group, in API order
    pub moves: Vec<String>,

    /// Up to four moves worth highlighting
    pub best_moves: Vec<String>,
}

impl DexEntry {
    /// Build an entry from fetched records, filtering moves to the given
    /// version group
    pub fn assemble(
        pokemon: &Pokemon,
        evolution: Vec<EvolutionStage>,
        version_group: &str,
    ) -> Self {
        let types: Vec<Type> = pokemon
            .type_names()
            .into_iter()
            .filter_map(Type::from_name)
            .collect();

        let moves = pokemon.moves_in_version(version_group);
        let best_moves = query::recommend(&moves);

        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            sprite: pokemon.sprites.front_default.clone(),
            weaknesses: query::weaknesses(&types),
            counter_tips: query::counter_tips(&types),
            types,
            evolution,
            moves,
            best_moves,
        }
    }
}
