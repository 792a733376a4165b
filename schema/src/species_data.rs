use crate::TypeName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a paired game release, e.g. `"x-y"` or `"scarlet-violet"`.
///
/// The set is open: ids the reference tables do not know are carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionGroupId(String);

impl VersionGroupId {
    pub fn new(id: impl Into<String>) -> Self {
        VersionGroupId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionGroupId {
    fn from(id: &str) -> Self {
        VersionGroupId(id.to_string())
    }
}

impl PartialEq<str> for VersionGroupId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VersionGroupId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for VersionGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a move is learned. Methods outside the common four keep their API name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Egg,
    Tutor,
    Other(String),
}

impl LearnMethod {
    pub fn as_str(&self) -> &str {
        match self {
            LearnMethod::LevelUp => "level-up",
            LearnMethod::Machine => "machine",
            LearnMethod::Egg => "egg",
            LearnMethod::Tutor => "tutor",
            LearnMethod::Other(name) => name,
        }
    }

    /// Only level-up learning carries a meaningful level.
    pub fn carries_level(&self) -> bool {
        matches!(self, LearnMethod::LevelUp)
    }
}

impl From<String> for LearnMethod {
    fn from(name: String) -> Self {
        let known = match name.as_str() {
            "level-up" => Some(LearnMethod::LevelUp),
            "machine" => Some(LearnMethod::Machine),
            "egg" => Some(LearnMethod::Egg),
            "tutor" => Some(LearnMethod::Tutor),
            _ => None,
        };
        known.unwrap_or_else(|| LearnMethod::Other(name))
    }
}

impl From<&str> for LearnMethod {
    fn from(name: &str) -> Self {
        LearnMethod::from(name.to_string())
    }
}

impl From<LearnMethod> for String {
    fn from(method: LearnMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for LearnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One way a move can be learned in one version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupDetail {
    pub version_group: VersionGroupId,
    pub learn_method: LearnMethod,
    pub level_learned_at: u8,
}

/// Everything known about how a creature learns a single move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLearnRecord {
    pub move_name: String,
    #[serde(default)]
    pub version_details: Vec<VersionGroupDetail>,
}

impl MoveLearnRecord {
    /// The first entry matching both the version group and the learn method.
    pub fn detail_for(
        &self,
        version_group: &VersionGroupId,
        learn_method: &LearnMethod,
    ) -> Option<&VersionGroupDetail> {
        self.version_details
            .iter()
            .find(|d| &d.version_group == version_group && &d.learn_method == learn_method)
    }

    /// The first entry for the version group, whatever the method.
    pub fn first_detail_in(&self, version_group: &VersionGroupId) -> Option<&VersionGroupDetail> {
        self.version_details
            .iter()
            .find(|d| &d.version_group == version_group)
    }
}

/// A species referenced from an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u32>,
}

impl SpeciesRef {
    pub fn named(name: impl Into<String>) -> Self {
        SpeciesRef {
            name: name.into(),
            id: None,
        }
    }
}

/// Conditions attached to a level-up evolution. Declaration order is the
/// order the conditions are described in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelUpConditions {
    pub min_level: Option<u8>,
    pub min_happiness: Option<u8>,
    pub min_affection: Option<u8>,
    pub min_beauty: Option<u8>,
    pub known_move: Option<String>,
    pub known_move_type: Option<TypeName>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub held_item: Option<String>,
    pub needs_overworld_rain: bool,
    pub turn_upside_down: bool,
    pub party_species: Option<String>,
    pub party_type: Option<TypeName>,
}

/// What triggers a single evolution, with only the fields that trigger uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trigger", rename_all = "kebab-case")]
pub enum TransitionDetail {
    LevelUp(LevelUpConditions),
    UseItem {
        item: String,
    },
    Trade {
        #[serde(default)]
        held_item: Option<String>,
        #[serde(default)]
        trade_species: Option<String>,
    },
    Shed,
    Spin,
    TowerOfDarkness,
    TowerOfWaters,
    ThreeCriticalHits,
    TakeDamage,
    Other {
        kind: String,
    },
}

impl TransitionDetail {
    /// The API name of the trigger kind.
    pub fn kind(&self) -> &str {
        match self {
            TransitionDetail::LevelUp(_) => "level-up",
            TransitionDetail::UseItem { .. } => "use-item",
            TransitionDetail::Trade { .. } => "trade",
            TransitionDetail::Shed => "shed",
            TransitionDetail::Spin => "spin",
            TransitionDetail::TowerOfDarkness => "tower-of-darkness",
            TransitionDetail::TowerOfWaters => "tower-of-waters",
            TransitionDetail::ThreeCriticalHits => "three-critical-hits",
            TransitionDetail::TakeDamage => "take-damage",
            TransitionDetail::Other { kind } => kind,
        }
    }
}

/// A node in an evolution tree. The root has no incoming transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: SpeciesRef,
    #[serde(default)]
    pub incoming: Vec<TransitionDetail>,
    #[serde(default)]
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn root(species: SpeciesRef) -> Self {
        EvolutionNode {
            species,
            incoming: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: EvolutionNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_incoming(mut self, detail: TransitionDetail) -> Self {
        self.incoming.push(detail);
        self
    }

    pub fn is_root(&self) -> bool {
        self.incoming.is_empty()
    }
}

// Drops descendants from an explicit stack so deep chains don't overflow.
impl Drop for EvolutionNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
