use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod evolution;
pub mod pokemon;
pub mod species;

pub use evolution::{ChainLink, EvolutionChain, EvolutionDetail, EvolutionStage};
pub use pokemon::{MoveEntry, NamedResource, Pokemon, Sprites, TypeSlot, VersionGroupDetail};
pub use species::{ResourceLink, Species};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
}

/// Decode an API response body into one of the wire types
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, ApiError> {
    serde_json::from_str(payload).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}
