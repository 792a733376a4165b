use crate::pokeapi::EvolutionChainDocument;
use schema::{LearnMethod, MoveLearnRecord, StatProfile, VersionGroupDetail, VersionGroupId};

/// A builder for learnsets with one record per move name.
///
/// # Example
/// ```
/// let learnset = LearnsetBuilder::new()
///     .learns("tackle", "x-y", "level-up", 1)
///     .learns("tackle", "emerald", "level-up", 1)
///     .build();
/// ```
#[derive(Default)]
pub struct LearnsetBuilder {
    records: Vec<MoveLearnRecord>,
}

impl LearnsetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a version entry, appending to the move's record if it already exists.
    pub fn learns(mut self, move_name: &str, version_group: &str, method: &str, level: u8) -> Self {
        let detail = VersionGroupDetail {
            version_group: VersionGroupId::from(version_group),
            learn_method: LearnMethod::from(method),
            level_learned_at: level,
        };
        match self.records.iter_mut().find(|r| r.move_name == move_name) {
            Some(record) => record.version_details.push(detail),
            None => self.records.push(MoveLearnRecord {
                move_name: move_name.to_string(),
                version_details: vec![detail],
            }),
        }
        self
    }

    pub fn build(self) -> Vec<MoveLearnRecord> {
        self.records
    }
}

/// Base stats in the usual HP/Atk/Def/SpA/SpD/Spe order.
pub fn base_stats(
    hp: u16,
    attack: u16,
    defense: u16,
    special_attack: u16,
    special_defense: u16,
    speed: u16,
) -> StatProfile {
    StatProfile {
        hp,
        attack,
        defense,
        special_attack,
        special_defense,
        speed,
    }
}

/// Eevee's branching chain as PokeAPI returns it, trimmed to three branches.
pub const EEVEE_CHAIN_JSON: &str = r#"{
    "id": 67,
    "baby_trigger_item": null,
    "chain": {
        "is_baby": false,
        "species": {"name": "eevee", "url": "https://pokeapi.co/api/v2/pokemon-species/133/"},
        "evolution_details": [],
        "evolves_to": [
            {
                "is_baby": false,
                "species": {"name": "vaporeon", "url": "https://pokeapi.co/api/v2/pokemon-species/134/"},
                "evolution_details": [
                    {
                        "gender": null,
                        "held_item": null,
                        "item": {"name": "water-stone", "url": "https://pokeapi.co/api/v2/item/84/"},
                        "known_move": null,
                        "known_move_type": null,
                        "location": null,
                        "min_affection": null,
                        "min_beauty": null,
                        "min_happiness": null,
                        "min_level": null,
                        "needs_overworld_rain": false,
                        "party_species": null,
                        "party_type": null,
                        "relative_physical_stats": null,
                        "time_of_day": "",
                        "trade_species": null,
                        "trigger": {"name": "use-item", "url": "https://pokeapi.co/api/v2/evolution-trigger/3/"},
                        "turn_upside_down": false
                    }
                ],
                "evolves_to": []
            },
            {
                "is_baby": false,
                "species": {"name": "espeon", "url": "https://pokeapi.co/api/v2/pokemon-species/196/"},
                "evolution_details": [
                    {
                        "gender": null,
                        "held_item": null,
                        "item": null,
                        "known_move": null,
                        "known_move_type": null,
                        "location": null,
                        "min_affection": null,
                        "min_beauty": null,
                        "min_happiness": 160,
                        "min_level": null,
                        "needs_overworld_rain": false,
                        "party_species": null,
                        "party_type": null,
                        "relative_physical_stats": null,
                        "time_of_day": "day",
                        "trade_species": null,
                        "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
                        "turn_upside_down": false
                    }
                ],
                "evolves_to": []
            },
            {
                "is_baby": false,
                "species": {"name": "sylveon", "url": "https://pokeapi.co/api/v2/pokemon-species/700/"},
                "evolution_details": [
                    {
                        "gender": null,
                        "held_item": null,
                        "item": null,
                        "known_move": null,
                        "known_move_type": {"name": "fairy", "url": "https://pokeapi.co/api/v2/type/18/"},
                        "location": null,
                        "min_affection": 2,
                        "min_beauty": null,
                        "min_happiness": null,
                        "min_level": null,
                        "needs_overworld_rain": false,
                        "party_species": null,
                        "party_type": null,
                        "relative_physical_stats": null,
                        "time_of_day": "",
                        "trade_species": null,
                        "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
                        "turn_upside_down": false
                    },
                    {
                        "gender": null,
                        "held_item": null,
                        "item": null,
                        "known_move": null,
                        "known_move_type": {"name": "fairy", "url": "https://pokeapi.co/api/v2/type/18/"},
                        "location": null,
                        "min_affection": null,
                        "min_beauty": null,
                        "min_happiness": 160,
                        "min_level": null,
                        "needs_overworld_rain": false,
                        "party_species": null,
                        "party_type": null,
                        "relative_physical_stats": null,
                        "time_of_day": "",
                        "trade_species": null,
                        "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
                        "turn_upside_down": false
                    }
                ],
                "evolves_to": []
            }
        ]
    }
}"#;

pub fn eevee_chain() -> EvolutionChainDocument {
    match EvolutionChainDocument::from_json(EEVEE_CHAIN_JSON) {
        Ok(doc) => doc,
        Err(err) => panic!("Failed to parse evolution chain fixture: {}", err),
    }
}
