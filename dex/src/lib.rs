//! Type matchup and moveset analysis for Pokedex displays.
//!
//! This crate is the pure half of lumidex: fixed lookup tables and the
//! functions that turn a creature's types and move list into display
//! recommendations. It performs no I/O and holds no mutable state, so every
//! function here is safe to call from anywhere without coordination.
//!
//! # Overview
//!
//! ```text
//! lumidex-api (PokeAPI wire format)
//!        │
//!        ▼
//! lumidex-client (fetching + assembly)
//!        │
//!        └─> lumidex-dex (matchup + moveset analysis) ← THIS CRATE
//! ```
//!
//! # Main Items
//!
//! - [`Type`] - the 18 elemental types with the weakness chart
//! - [`query::weaknesses`] - types that hit a defender super effectively
//! - [`query::counter_tips`] - advisory text built from the weaknesses
//! - [`query::recommend`] - bounded, priority-biased display moveset
//!
//! # Example Usage
//!
//! ```
//! use lumidex_dex::{query, Type};
//!
//! // Gengar is Ghost/Poison
//! let types = [Type::Ghost, Type::Poison];
//! let weak = query::weaknesses(&types);
//! assert_eq!(weak, vec![Type::Ghost, Type::Dark, Type::Ground, Type::Psychic]);
//! ```

pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use types::{Type, WEAKNESS_CHART};
