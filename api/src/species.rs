//! Species endpoint response types
//!
//! `/api/v2/pokemon-species/{name}` carries far more than the display
//! needs; only the evolution chain link is kept.

use serde::Deserialize;

/// A URL-only resource link (the API omits the name on some links)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

/// One pokemon species record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Species {
    /// Lowercase species name
    pub name: String,

    /// Link to this species' evolution chain, if it has one
    #[serde(default)]
    pub evolution_chain: Option<ResourceLink>,
}
