//! Serde shapes for PokeAPI documents and their conversion into engine records.
//!
//! Only the fields the engine reads are declared; everything else in a
//! document is ignored. Nothing here performs I/O: callers hand in JSON they
//! already retrieved.

use crate::breeding::GenderRatio;
use crate::effectiveness::DefensiveProfile;
use crate::errors::{RecordResult, TypeDataError, TypeDataResult};
use crate::format::display_name;
use crate::move_stats::{MoveStats, PastMoveValues};
use crate::species::{classify_species, SpeciesStatus};
use schema::{
    EvolutionNode, LearnMethod, LevelUpConditions, MoveLearnRecord, SpeciesRef, StatKey,
    StatProfile, TransitionDetail, TypeName, VersionGroupDetail, VersionGroupId,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

fn from_json<T: DeserializeOwned>(document: &str) -> RecordResult<T> {
    Ok(serde_json::from_str(document)?)
}

/// Numeric id at the end of a resource URL, e.g.
/// `https://pokeapi.co/api/v2/pokemon-species/25/` gives 25.
pub fn resource_id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedApiResource {
    fn species_ref(&self) -> SpeciesRef {
        SpeciesRef {
            name: self.name.clone(),
            id: resource_id_from_url(&self.url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

// Pokemon

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u16,
    pub stat: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    pub r#type: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMoveVersion {
    pub level_learned_at: u8,
    pub move_learn_method: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMove {
    pub r#move: NamedApiResource,
    #[serde(default)]
    pub version_group_details: Vec<PokemonMoveVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDocument {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub species: Option<NamedApiResource>,
}

impl PokemonDocument {
    pub fn from_json(document: &str) -> RecordResult<Self> {
        from_json(document)
    }

    /// Base stats; stats the engine does not know are skipped.
    pub fn stat_profile(&self) -> StatProfile {
        StatProfile::from_entries(self.stats.iter().filter_map(|entry| {
            StatKey::from_str(&entry.stat.name)
                .ok()
                .map(|key| (key, entry.base_stat))
        }))
    }

    /// Types in slot order.
    pub fn type_names(&self) -> TypeDataResult<Vec<TypeName>> {
        let mut slots: Vec<&PokemonType> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots
            .into_iter()
            .map(|t| {
                TypeName::from_str(&t.r#type.name)
                    .map_err(|_| TypeDataError::InvalidType(t.r#type.name.clone()))
            })
            .collect()
    }

    pub fn defensive_profile(&self) -> TypeDataResult<DefensiveProfile> {
        DefensiveProfile::from_types(&self.type_names()?)
    }

    pub fn learn_records(&self) -> Vec<MoveLearnRecord> {
        self.moves
            .iter()
            .map(|entry| MoveLearnRecord {
                move_name: entry.r#move.name.clone(),
                version_details: entry
                    .version_group_details
                    .iter()
                    .map(|d| VersionGroupDetail {
                        version_group: VersionGroupId::new(d.version_group.name.clone()),
                        learn_method: LearnMethod::from(d.move_learn_method.name.clone()),
                        level_learned_at: d.level_learned_at,
                    })
                    .collect(),
            })
            .collect()
    }
}

// Species

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDocument {
    pub id: u32,
    pub name: String,
    pub gender_rate: i8,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    #[serde(default)]
    pub egg_groups: Vec<NamedApiResource>,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

impl SpeciesDocument {
    pub fn from_json(document: &str) -> RecordResult<Self> {
        from_json(document)
    }

    pub fn gender_ratio(&self) -> GenderRatio {
        GenderRatio::from_gender_rate(self.gender_rate)
    }

    pub fn evolution_chain_id(&self) -> Option<u32> {
        self.evolution_chain
            .as_ref()
            .and_then(|chain| resource_id_from_url(&chain.url))
    }

    pub fn status(&self) -> Option<SpeciesStatus> {
        classify_species(&self.name, self.is_legendary, self.is_mythical)
    }

    pub fn egg_group_names(&self) -> Vec<String> {
        self.egg_groups
            .iter()
            .map(|group| display_name(&group.name))
            .collect()
    }
}

// Evolution chain

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub trigger: Option<NamedApiResource>,
    #[serde(default)]
    pub item: Option<NamedApiResource>,
    #[serde(default)]
    pub held_item: Option<NamedApiResource>,
    #[serde(default)]
    pub known_move: Option<NamedApiResource>,
    #[serde(default)]
    pub known_move_type: Option<NamedApiResource>,
    #[serde(default)]
    pub location: Option<NamedApiResource>,
    #[serde(default)]
    pub party_species: Option<NamedApiResource>,
    #[serde(default)]
    pub party_type: Option<NamedApiResource>,
    #[serde(default)]
    pub trade_species: Option<NamedApiResource>,
    #[serde(default)]
    pub min_level: Option<u8>,
    #[serde(default)]
    pub min_happiness: Option<u8>,
    #[serde(default)]
    pub min_affection: Option<u8>,
    #[serde(default)]
    pub min_beauty: Option<u8>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    #[serde(default)]
    pub turn_upside_down: bool,
    #[serde(default)]
    pub time_of_day: String,
}

fn resource_name(resource: &Option<NamedApiResource>) -> Option<String> {
    resource.as_ref().map(|r| r.name.clone())
}

/// Unknown type names are dropped from an evolution condition rather than
/// failing the whole chain.
fn condition_type(resource: &Option<NamedApiResource>) -> Option<TypeName> {
    let name = &resource.as_ref()?.name;
    match TypeName::from_str(name) {
        Ok(type_name) => Some(type_name),
        Err(_) => {
            warn!(type_name = %name, "ignoring unknown type in evolution condition");
            None
        }
    }
}

impl EvolutionDetail {
    pub fn to_transition(&self) -> TransitionDetail {
        let trigger = self
            .trigger
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or_default();

        match trigger {
            "level-up" => TransitionDetail::LevelUp(LevelUpConditions {
                min_level: self.min_level,
                min_happiness: self.min_happiness,
                min_affection: self.min_affection,
                min_beauty: self.min_beauty,
                known_move: resource_name(&self.known_move),
                known_move_type: condition_type(&self.known_move_type),
                location: resource_name(&self.location),
                time_of_day: Some(self.time_of_day.clone()).filter(|t| !t.is_empty()),
                held_item: resource_name(&self.held_item),
                needs_overworld_rain: self.needs_overworld_rain,
                turn_upside_down: self.turn_upside_down,
                party_species: resource_name(&self.party_species),
                party_type: condition_type(&self.party_type),
            }),
            "use-item" => match resource_name(&self.item) {
                Some(item) => TransitionDetail::UseItem { item },
                None => {
                    warn!("use-item evolution without an item");
                    TransitionDetail::Other {
                        kind: trigger.to_string(),
                    }
                }
            },
            "trade" => TransitionDetail::Trade {
                held_item: resource_name(&self.held_item),
                trade_species: resource_name(&self.trade_species),
            },
            "shed" => TransitionDetail::Shed,
            "spin" => TransitionDetail::Spin,
            "tower-of-darkness" => TransitionDetail::TowerOfDarkness,
            "tower-of-waters" => TransitionDetail::TowerOfWaters,
            "three-critical-hits" => TransitionDetail::ThreeCriticalHits,
            "take-damage" => TransitionDetail::TakeDamage,
            other => TransitionDetail::Other {
                kind: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedApiResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    pub fn to_node(&self) -> EvolutionNode {
        EvolutionNode {
            species: self.species.species_ref(),
            incoming: self
                .evolution_details
                .iter()
                .map(EvolutionDetail::to_transition)
                .collect(),
            children: self.evolves_to.iter().map(ChainLink::to_node).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainDocument {
    pub id: u32,
    pub chain: ChainLink,
}

impl EvolutionChainDocument {
    pub fn from_json(document: &str) -> RecordResult<Self> {
        from_json(document)
    }

    pub fn to_tree(&self) -> EvolutionNode {
        self.chain.to_node()
    }
}

// Move

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePastValue {
    pub version_group: NamedApiResource,
    #[serde(default)]
    pub power: Option<u16>,
    #[serde(default)]
    pub accuracy: Option<u8>,
    #[serde(default)]
    pub pp: Option<u8>,
    #[serde(default)]
    pub r#type: Option<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDocument {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub power: Option<u16>,
    #[serde(default)]
    pub accuracy: Option<u8>,
    #[serde(default)]
    pub pp: Option<u8>,
    #[serde(default)]
    pub r#type: Option<NamedApiResource>,
    #[serde(default)]
    pub past_values: Vec<MovePastValue>,
}

impl MoveDocument {
    pub fn from_json(document: &str) -> RecordResult<Self> {
        from_json(document)
    }

    pub fn to_move_stats(&self) -> MoveStats {
        MoveStats {
            id: self.id,
            name: self.name.clone(),
            power: self.power,
            accuracy: self.accuracy,
            pp: self.pp,
            move_type: condition_type(&self.r#type),
            past_values: self
                .past_values
                .iter()
                .map(|pv| PastMoveValues {
                    version_group: VersionGroupId::new(pv.version_group.name.clone()),
                    power: pv.power,
                    accuracy: pv.accuracy,
                    pp: pv.pp,
                    move_type: condition_type(&pv.r#type),
                })
                .collect(),
        }
    }
}
