//! Async client for the PokeAPI creature database.
//!
//! Wraps the three REST lookups a dex display needs (pokemon, species,
//! evolution chain), retries transient failures, and assembles the result
//! into a single [`DexEntry`] ready for rendering.

mod entry;
mod fetch;

use anyhow::Result;

pub use entry::DexEntry;
pub use fetch::RetryPolicy;

pub use lumidex_api::{ApiError, EvolutionChain, EvolutionStage, Pokemon, Species};
pub use lumidex_dex::Type;

/// Public PokeAPI endpoint
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Version group used for move filtering when none is given
pub const DEFAULT_VERSION_GROUP: &str = "sword-shield";

/// Async PokeAPI client
pub struct DexClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl DexClient {
    /// Create a client against the public PokeAPI endpoint
    pub fn new() -> Self {
        Self::with_base_url(POKEAPI_URL)
    }

    /// Create a client against a custom endpoint (mirror, test server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch a pokemon by name or dex number
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name.to_lowercase());
        self.get_json(&url).await
    }

    /// Fetch the species record behind a pokemon
    pub async fn species(&self, pokemon: &Pokemon) -> Result<Species> {
        self.get_json(&pokemon.species.url).await
    }

    /// Fetch an evolution chain by its URL
    pub async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain> {
        self.get_json(url).await
    }

    /// Look up a pokemon and assemble its display entry, filtering moves to
    /// the default version group
    pub async fn lookup(&self, name: &str) -> Result<DexEntry> {
        self.lookup_in_version(name, DEFAULT_VERSION_GROUP).await
    }

    /// Look up a pokemon and assemble its display entry.
    ///
    /// Performs up to three dependent requests: the pokemon record, its
    /// species, and the species' evolution chain. Any upstream failure
    /// surfaces as a single error; a species without an evolution chain
    /// yields an empty line rather than an error.
    pub async fn lookup_in_version(&self, name: &str, version_group: &str) -> Result<DexEntry> {
        let pokemon = self.pokemon(name).await?;
        tracing::debug!(name = %pokemon.name, id = pokemon.id, "Fetched pokemon");

        let species = self.species(&pokemon).await?;
        let evolution = match &species.evolution_chain {
            Some(link) => self.evolution_chain(&link.url).await?.stages(),
            None => Vec::new(),
        };
        tracing::debug!(stages = evolution.len(), "Fetched evolution line");

        Ok(DexEntry::assemble(&pokemon, evolution, version_group))
    }
}

impl Default for DexClient {
    fn default() -> Self {
        Self::new()
    }
}
