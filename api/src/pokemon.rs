//! Pokemon endpoint response types
//!
//! These types mirror the JSON structure of `/api/v2/pokemon/{name}`,
//! trimmed to the fields the display layer reads. Unknown fields are
//! ignored and optional arrays default to empty.

use serde::Deserialize;

/// A name + URL pair, used throughout the API to link resources
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One pokemon record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    /// National dex id
    pub id: u32,

    /// Lowercase name (e.g. "gengar")
    pub name: String,

    /// Sprite URLs
    #[serde(default)]
    pub sprites: Sprites,

    /// Assigned types in slot order (one or two)
    #[serde(default)]
    pub types: Vec<TypeSlot>,

    /// Every move this pokemon can learn, across all game versions
    #[serde(default)]
    pub moves: Vec<MoveEntry>,

    /// Link to the species record (which links the evolution chain)
    pub species: NamedResource,
}

impl Pokemon {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.type_ref.name.as_str()).collect()
    }

    /// Names of moves learnable in the given version group, in API order
    pub fn moves_in_version(&self, version_group: &str) -> Vec<String> {
        self.moves
            .iter()
            .filter(|m| {
                m.version_group_details
                    .iter()
                    .any(|v| v.version_group.name == version_group)
            })
            .map(|m| m.move_ref.name.clone())
            .collect()
    }
}

/// Sprite URLs for a pokemon
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Sprites {
    /// Default front-facing sprite, when the API has one
    #[serde(default)]
    pub front_default: Option<String>,
}

/// A type assignment slot
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    /// Slot number (1-based; primary type is slot 1)
    pub slot: u32,

    /// The assigned type
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// A learnable move together with its per-version availability
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveEntry {
    /// The move itself
    #[serde(rename = "move")]
    pub move_ref: NamedResource,

    /// One entry per game version the move is available in
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// Availability of a move in one version group
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VersionGroupDetail {
    /// The game version group (e.g. "sword-shield")
    pub version_group: NamedResource,

    /// Level at which the move is learned (0 for machine/tutor moves)
    #[serde(default)]
    pub level_learned_at: u32,

    /// How the move is learned (level-up, machine, tutor, egg)
    #[serde(default)]
    pub move_learn_method: Option<NamedResource>,
}
