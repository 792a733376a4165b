use crate::StatKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The 25 natures, in alphabetical order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NatureName {
    Adamant,
    Bashful,
    Bold,
    Brave,
    Calm,
    Careful,
    Docile,
    Gentle,
    Hardy,
    Hasty,
    Impish,
    Jolly,
    Lax,
    Lonely,
    Mild,
    Modest,
    Naive,
    Naughty,
    Quiet,
    Quirky,
    Rash,
    Relaxed,
    Sassy,
    Serious,
    Timid,
}

/// The stat a non-neutral nature raises by 10% and the one it lowers by 10%.
/// The two are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NatureModifier {
    pub increased: StatKey,
    pub decreased: StatKey,
}

impl NatureName {
    pub fn api_name(self) -> &'static str {
        self.into()
    }

    /// `None` for the five neutral natures.
    pub fn modifier(self) -> Option<NatureModifier> {
        use NatureName::*;
        use StatKey::*;

        let (increased, decreased) = match self {
            Bashful | Docile | Hardy | Quirky | Serious => return None,
            Adamant => (Attack, SpecialAttack),
            Bold => (Defense, Attack),
            Brave => (Attack, Speed),
            Calm => (SpecialDefense, Attack),
            Careful => (SpecialDefense, SpecialAttack),
            Gentle => (SpecialDefense, Defense),
            Hasty => (Speed, Defense),
            Impish => (Defense, SpecialAttack),
            Jolly => (Speed, SpecialAttack),
            Lax => (Defense, SpecialDefense),
            Lonely => (Attack, Defense),
            Mild => (SpecialAttack, Defense),
            Modest => (SpecialAttack, Attack),
            Naive => (Speed, SpecialDefense),
            Naughty => (Attack, SpecialDefense),
            Quiet => (SpecialAttack, Speed),
            Rash => (SpecialAttack, SpecialDefense),
            Relaxed => (Defense, Speed),
            Sassy => (SpecialDefense, Speed),
            Timid => (Speed, Attack),
        };
        Some(NatureModifier {
            increased,
            decreased,
        })
    }

    pub fn increased_stat(self) -> Option<StatKey> {
        self.modifier().map(|m| m.increased)
    }

    pub fn decreased_stat(self) -> Option<StatKey> {
        self.modifier().map(|m| m.decreased)
    }

    pub fn is_neutral(self) -> bool {
        self.modifier().is_none()
    }
}

impl fmt::Display for NatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
