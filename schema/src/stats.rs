use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The six permanent stats, named the way the API names them.
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
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StatKey {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKey {
    pub const ALL: [StatKey; 6] = [
        StatKey::Hp,
        StatKey::Attack,
        StatKey::Defense,
        StatKey::SpecialAttack,
        StatKey::SpecialDefense,
        StatKey::Speed,
    ];

    /// The kebab-case API name, e.g. `"special-attack"`.
    pub fn api_name(self) -> &'static str {
        self.into()
    }

    /// Compact label used in tight tables.
    pub fn short_label(self) -> &'static str {
        match self {
            StatKey::Hp => "HP",
            StatKey::Attack => "Atk",
            StatKey::Defense => "Def",
            StatKey::SpecialAttack => "SpA",
            StatKey::SpecialDefense => "SpD",
            StatKey::Speed => "Spd",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatKey::Hp => "HP",
            StatKey::Attack => "Attack",
            StatKey::Defense => "Defense",
            StatKey::SpecialAttack => "Sp. Atk",
            StatKey::SpecialDefense => "Sp. Def",
            StatKey::Speed => "Speed",
        };
        write!(f, "{}", name)
    }
}

/// A species' base stats. Keys missing from the source default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StatProfile {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl StatProfile {
    /// Build a profile from `(stat, value)` pairs; later pairs win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StatKey, u16)>,
    {
        let mut profile = StatProfile::default();
        for (stat, value) in entries {
            profile.set(stat, value);
        }
        profile
    }

    pub fn get(&self, stat: StatKey) -> u16 {
        match stat {
            StatKey::Hp => self.hp,
            StatKey::Attack => self.attack,
            StatKey::Defense => self.defense,
            StatKey::SpecialAttack => self.special_attack,
            StatKey::SpecialDefense => self.special_defense,
            StatKey::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: StatKey, value: u16) {
        match stat {
            StatKey::Hp => self.hp = value,
            StatKey::Attack => self.attack = value,
            StatKey::Defense => self.defense = value,
            StatKey::SpecialAttack => self.special_attack = value,
            StatKey::SpecialDefense => self.special_defense = value,
            StatKey::Speed => self.speed = value,
        }
    }

    /// Base stat total.
    pub fn total(&self) -> u32 {
        StatKey::ALL.iter().map(|&stat| self.get(stat) as u32).sum()
    }
}

/// Per-stat investment (IVs or EVs). Every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StatSpread {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl StatSpread {
    /// A spread with the same value in every stat.
    pub fn uniform(value: u16) -> Self {
        StatSpread {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    pub fn get(&self, stat: StatKey) -> u16 {
        match stat {
            StatKey::Hp => self.hp,
            StatKey::Attack => self.attack,
            StatKey::Defense => self.defense,
            StatKey::SpecialAttack => self.special_attack,
            StatKey::SpecialDefense => self.special_defense,
            StatKey::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: StatKey, value: u16) {
        match stat {
            StatKey::Hp => self.hp = value,
            StatKey::Attack => self.attack = value,
            StatKey::Defense => self.defense = value,
            StatKey::SpecialAttack => self.special_attack = value,
            StatKey::SpecialDefense => self.special_defense = value,
            StatKey::Speed => self.speed = value,
        }
    }

    pub fn total(&self) -> u32 {
        StatKey::ALL.iter().map(|&stat| self.get(stat) as u32).sum()
    }

    /// All six `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, u16)> + '_ {
        StatKey::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }

    /// Only the stats with a non-zero value, as an EV chart would show them.
    pub fn invested(&self) -> Vec<(StatKey, u16)> {
        self.iter().filter(|(_, value)| *value > 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_stat_key_names() {
        assert_eq!(StatKey::SpecialAttack.api_name(), "special-attack");
        assert_eq!(StatKey::from_str("special-defense"), Ok(StatKey::SpecialDefense));
        assert_eq!(StatKey::SpecialAttack.to_string(), "Sp. Atk");
        assert_eq!(StatKey::Speed.short_label(), "Spd");
    }

    #[test]
    fn test_profile_missing_keys_default_to_zero() {
        let profile: StatProfile = serde_json::from_str(r#"{"attack": 110, "speed": 95}"#).unwrap();
        assert_eq!(profile.attack, 110);
        assert_eq!(profile.speed, 95);
        assert_eq!(profile.get(StatKey::SpecialAttack), 0);
        assert_eq!(profile.total(), 205);
    }

    #[test]
    fn test_spread_invested_skips_zeroes() {
        let mut spread = StatSpread::default();
        spread.set(StatKey::Hp, 252);
        spread.set(StatKey::Defense, 4);
        assert_eq!(spread.invested(), vec![(StatKey::Hp, 252), (StatKey::Defense, 4)]);
        assert_eq!(spread.total(), 256);
        assert_eq!(StatSpread::uniform(31).total(), 186);
    }
}
