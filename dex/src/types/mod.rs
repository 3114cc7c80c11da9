//! Domain types for dex analysis

mod pokemon_type;

pub use pokemon_type::{Type, WEAKNESS_CHART};
