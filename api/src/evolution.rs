//! Evolution chain response types and line flattening
//!
//! `/api/v2/evolution-chain/{id}` returns a tree: each link can evolve
//! into several species. The display shows a single line, so [`stages`]
//! walks the first branch at every step.
//!
//! [`stages`]: EvolutionChain::stages

use serde::Deserialize;

use crate::pokemon::NamedResource;

/// One evolution chain record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,

    /// Root of the evolution tree (the base species)
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainLink {
    /// The species at this node
    pub species: NamedResource,

    /// How this species is reached from its predecessor (empty at the root)
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,

    /// Further evolutions branching from here
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Conditions under which an evolution happens
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvolutionDetail {
    /// Minimum level, for level-up evolutions
    #[serde(default)]
    pub min_level: Option<u32>,

    /// Trigger kind (e.g. "level-up", "trade", "use-item")
    #[serde(default)]
    pub trigger: Option<NamedResource>,

    /// Required item, for item evolutions
    #[serde(default)]
    pub item: Option<NamedResource>,
}

/// One stage of a flattened evolution line
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionStage {
    /// Species name at this stage
    pub name: String,

    /// Level required to reach this stage, if level-gated
    pub min_level: Option<u32>,

    /// Trigger name, if the API reports one
    pub trigger: Option<String>,

    /// Item required to reach this stage, if any
    pub item: Option<String>,
}

impl EvolutionStage {
    /// Whether this stage is reached by trading
    pub fn by_trade(&self) -> bool {
        self.trigger.as_deref() == Some("trade")
    }
}

impl EvolutionChain {
    /// Flatten the tree into a linear evolution line, following the first
    /// branch at each step. Each stage carries the first detail entry of
    /// its link.
    pub fn stages(&self) -> Vec<EvolutionStage> {
        let mut stages = Vec::new();
        let mut node = Some(&self.chain);

        while let Some(link) = node {
            let details = link.evolution_details.first();
            stages.push(EvolutionStage {
                name: link.species.name.clone(),
                min_level: details.and_then(|d| d.min_level),
                trigger: details.and_then(|d| d.trigger.as_ref().map(|t| t.name.clone())),
                item: details.and_then(|d| d.item.as_ref().map(|i| i.name.clone())),
            });
            node = link.evolves_to.first();
        }

        stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> EvolutionChain {
        let json = r#"{
            "id": 47,
            "chain": {
                "species": { "name": "gastly", "url": "https://api.example/pokemon-species/92/" },
                "evolution_details": [],
                "evolves_to": [
                    {
                        "species": { "name": "haunter", "url": "https://api.example/pokemon-species/93/" },
                        "evolution_details": [
                            { "min_level": 25, "trigger": { "name": "level-up", "url": "https://api.example/trigger/1/" } }
                        ],
                        "evolves_to": [
                            {
                                "species": { "name": "gengar", "url": "https://api.example/pokemon-species/94/" },
                                "evolution_details": [
                                    { "trigger": { "name": "trade", "url": "https://api.example/trigger/2/" } }
                                ],
                                "evolves_to": []
                            }
                        ]
                    }
                ]
            }
        }"#;
        crate::from_json(json).unwrap()
    }

    #[test]
    fn test_stages_walk_the_chain() {
        let stages = chain().stages();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].name, "gastly");
        assert_eq!(stages[1].name, "haunter");
        assert_eq!(stages[2].name, "gengar");
    }

    #[test]
    fn test_stage_details() {
        let stages = chain().stages();
        assert_eq!(stages[0].min_level, None);
        assert_eq!(stages[1].min_level, Some(25));
        assert!(!stages[1].by_trade());
        assert!(stages[2].by_trade());
    }

    #[test]
    fn test_branching_chain_follows_first_branch() {
        // Eevee-style: several evolves_to entries, only the first is shown
        let json = r#"{
            "id": 67,
            "chain": {
                "species": { "name": "eevee", "url": "https://api.example/pokemon-species/133/" },
                "evolves_to": [
                    {
                        "species": { "name": "vaporeon", "url": "https://api.example/pokemon-species/134/" },
                        "evolution_details": [
                            { "item": { "name": "water-stone", "url": "https://api.example/item/84/" } }
                        ],
                        "evolves_to": []
                    },
                    {
                        "species": { "name": "jolteon", "url": "https://api.example/pokemon-species/135/" },
                        "evolves_to": []
                    }
                ]
            }
        }"#;
        let chain: EvolutionChain = crate::from_json(json).unwrap();
        let stages = chain.stages();
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[1].name, "vaporeon");
        assert_eq!(stages[1].item.as_deref(), Some("water-stone"));
    }

    #[test]
    fn test_single_stage_chain() {
        let json = r#"{
            "id": 66,
            "chain": {
                "species": { "name": "farfetchd", "url": "https://api.example/pokemon-species/83/" },
                "evolves_to": []
            }
        }"#;
        let chain: EvolutionChain = crate::from_json(json).unwrap();
        assert_eq!(chain.stages().len(), 1);
    }
}
