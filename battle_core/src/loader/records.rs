//! Upstream API payload shapes

use serde::{Deserialize, Serialize};

/// Name/url pair used throughout the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: i64,
    #[serde(default)]
    pub effort: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub kind: NamedResource,
}

/// `pokemon/{name}` payload, reduced to the fields a battle needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

/// `evolution-chain/{id}` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChainRecord {
    pub chain: ChainLink,
}

/// One node of an evolution tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Species names depth-first: this node, then each branch in order
    pub fn flatten(&self) -> Vec<String> {
        let mut names = vec![self.species.name.clone()];
        for next in &self.evolves_to {
            names.extend(next.flatten());
        }
        names
    }
}
