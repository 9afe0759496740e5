//! Combatant loading from JSON files
//!
//! Accepts either the normalized [`StatBlock`] shape or a bundle of raw
//! upstream payloads (`pokemon`, optional `evolution_chain`). Other keys in
//! a bundle are ignored. No network access happens here.

mod records;

pub use records::{
    AbilitySlot, ChainLink, EvolutionChainRecord, MoveEntry, NamedResource, PokemonRecord,
    StatEntry, TypeSlot,
};

use crate::stat_block::StatBlock;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Combatant loading error
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read combatant file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse combatant JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Combatant record is missing '{0}'")]
    MissingField(String),
}

/// Raw upstream payloads saved together in one file
#[derive(Debug, Clone, Deserialize)]
pub struct RecordBundle {
    pub pokemon: PokemonRecord,
    #[serde(default)]
    pub evolution_chain: Option<EvolutionChainRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CombatantFile {
    Bundle(Box<RecordBundle>),
    Normalized(StatBlock),
}

/// Build a stat block from upstream payloads
///
/// Without an evolution chain the combatant is its own single-entry lineage.
pub fn stat_block_from_records(
    pokemon: &PokemonRecord,
    chain: Option<&EvolutionChainRecord>,
) -> StatBlock {
    let mut types: Vec<&TypeSlot> = pokemon.types.iter().collect();
    types.sort_by_key(|t| t.slot);

    let stats: BTreeMap<String, i64> = pokemon
        .stats
        .iter()
        .map(|s| (s.stat.name.clone(), s.base_stat))
        .collect();

    let name = pokemon.name.clone();
    let evolution_chain = match chain {
        Some(record) => record.chain.flatten(),
        None => {
            warn!(combatant = %name, "no evolution chain supplied");
            vec![name.clone()]
        }
    };

    StatBlock {
        name,
        types: types.into_iter().map(|t| t.kind.name.clone()).collect(),
        stats,
        abilities: pokemon
            .abilities
            .iter()
            .map(|a| a.ability.name.clone())
            .collect(),
        moves: pokemon.moves.iter().map(|m| m.kind.name.clone()).collect(),
        evolution_chain,
    }
}

/// Parse a combatant from a JSON string in either supported shape
pub fn parse_stat_block(content: &str) -> Result<StatBlock, LoadError> {
    let block = match serde_json::from_str::<CombatantFile>(content)? {
        CombatantFile::Bundle(bundle) => {
            stat_block_from_records(&bundle.pokemon, bundle.evolution_chain.as_ref())
        }
        CombatantFile::Normalized(block) => block,
    };

    if block.name.trim().is_empty() {
        return Err(LoadError::MissingField("name".to_string()));
    }
    Ok(block)
}

/// Load a combatant from a JSON file
pub fn load_stat_block(path: &Path) -> Result<StatBlock, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_stat_block(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLE: &str = r#"{
        "pokemon": {
            "name": "Charmander",
            "types": [{"slot": 1, "type": {"name": "fire", "url": ""}}],
            "stats": [
                {"base_stat": 39, "effort": 0, "stat": {"name": "hp"}},
                {"base_stat": 52, "effort": 0, "stat": {"name": "attack"}},
                {"base_stat": 43, "effort": 0, "stat": {"name": "defense"}},
                {"base_stat": 60, "effort": 0, "stat": {"name": "special-attack"}},
                {"base_stat": 50, "effort": 0, "stat": {"name": "special-defense"}},
                {"base_stat": 65, "effort": 1, "stat": {"name": "speed"}}
            ],
            "abilities": [
                {"ability": {"name": "blaze"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "solar-power"}, "is_hidden": true, "slot": 3}
            ],
            "moves": [{"move": {"name": "scratch"}}, {"move": {"name": "ember"}}],
            "species": {"name": "charmander", "url": "https://example.invalid/species/4/"}
        },
        "evolution_chain": {
            "chain": {
                "species": {"name": "charmander"},
                "evolves_to": [{
                    "species": {"name": "charmeleon"},
                    "evolves_to": [{"species": {"name": "charizard"}, "evolves_to": []}]
                }]
            }
        }
    }"#;

    #[test]
    fn test_parse_bundle() {
        let block = parse_stat_block(BUNDLE).unwrap();
        assert_eq!(block.name, "Charmander");
        assert_eq!(block.types, vec!["fire"]);
        assert_eq!(block.stats.len(), 6);
        assert_eq!(block.stat("speed").unwrap(), 65);
        assert_eq!(block.abilities, vec!["blaze", "solar-power"]);
        assert_eq!(block.moves, vec!["scratch", "ember"]);
        assert_eq!(block.evolution_chain, vec!["charmander", "charmeleon", "charizard"]);
    }

    #[test]
    fn test_types_ordered_by_slot() {
        let json = r#"{
            "name": "bulbasaur",
            "types": [
                {"slot": 2, "type": {"name": "poison"}},
                {"slot": 1, "type": {"name": "grass"}}
            ]
        }"#;
        let record: PokemonRecord = serde_json::from_str(json).unwrap();
        let block = stat_block_from_records(&record, None);
        assert_eq!(block.types, vec!["grass", "poison"]);
        assert_eq!(block.evolution_chain, vec!["bulbasaur"]);
    }

    #[test]
    fn test_parse_normalized() {
        let json = r#"{
            "name": "pikachu",
            "types": ["electric"],
            "stats": {"hp": 35, "attack": 55, "defense": 40, "speed": 90},
            "abilities": ["static"],
            "moves": ["thunder-shock"],
            "evolution_chain": ["pichu", "pikachu", "raichu"]
        }"#;
        let block = parse_stat_block(json).unwrap();
        assert_eq!(block.name, "pikachu");
        assert!(block.core_stats().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"{"name": " ", "stats": {}}"#;
        assert!(matches!(
            parse_stat_block(json),
            Err(LoadError::MissingField(ref field)) if field == "name"
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_stat_block("{"), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_stat_block(Path::new("/nonexistent/pikachu.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
