//! Competitive training heuristics: nature, effort values and individual
//! values derived from a base stat profile.
//!
//! These are decision ladders over a handful of tunable thresholds. The
//! defaults live in the constants below; [`TrainingThresholds`] lets a caller
//! override them from a RON document.

use crate::errors::RecordResult;
use schema::{NatureName, StatKey, StatProfile, StatSpread};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Nature ladder
const OFFENSE_BIAS_MARGIN: u16 = 10;
const FAST_ATTACKER_SPEED: u16 = 80;
const FAST_BALANCED_SPEED: u16 = 100;

// EV allocation
const EV_SPEED_THRESHOLD: u16 = 70;
const MAX_STAT_EVS: u16 = 252;
const SPARE_EVS: u16 = 4;

// IV selection
const IV_OFFENSE_MARGIN: u16 = 15;
const SLOW_SPEED_THRESHOLD: u16 = 50;
const MAX_IV: u16 = 31;
const MIN_IV: u16 = 0;

/// Tunable thresholds for the recommendation ladders. Missing fields in a
/// configuration document keep their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingThresholds {
    /// How far one offensive stat must lead the other to count as a bias.
    pub offense_bias_margin: u16,
    /// Speed above which a biased attacker takes a speed-boosting nature.
    pub fast_attacker_speed: u16,
    /// Speed above which a balanced attacker takes a speed-boosting nature.
    pub fast_balanced_speed: u16,
    /// Base speed at or above which EVs go into speed instead of HP.
    pub ev_speed_threshold: u16,
    pub max_stat_evs: u16,
    pub spare_evs: u16,
    /// How far one offensive stat must lead for the other's IV to be zeroed.
    pub iv_offense_margin: u16,
    /// Base speed below which the speed IV is zeroed.
    pub slow_speed_threshold: u16,
    pub max_iv: u16,
    pub min_iv: u16,
}

impl Default for TrainingThresholds {
    fn default() -> Self {
        TrainingThresholds {
            offense_bias_margin: OFFENSE_BIAS_MARGIN,
            fast_attacker_speed: FAST_ATTACKER_SPEED,
            fast_balanced_speed: FAST_BALANCED_SPEED,
            ev_speed_threshold: EV_SPEED_THRESHOLD,
            max_stat_evs: MAX_STAT_EVS,
            spare_evs: SPARE_EVS,
            iv_offense_margin: IV_OFFENSE_MARGIN,
            slow_speed_threshold: SLOW_SPEED_THRESHOLD,
            max_iv: MAX_IV,
            min_iv: MIN_IV,
        }
    }
}

impl TrainingThresholds {
    /// Load thresholds from a RON document such as
    /// `(fast_attacker_speed: 90, ev_speed_threshold: 75)`.
    pub fn from_ron(document: &str) -> RecordResult<Self> {
        Ok(ron::from_str(document)?)
    }

    /// EVs spent by every allocation these thresholds produce.
    pub fn ev_budget(&self) -> u32 {
        2 * self.max_stat_evs as u32 + self.spare_evs as u32
    }
}

/// Nature, EVs and IVs recommended for one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingPlan {
    pub nature: NatureName,
    pub evs: StatSpread,
    pub ivs: StatSpread,
}

/// Applies the recommendation ladders with a fixed set of thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingAdvisor {
    thresholds: TrainingThresholds,
}

impl TrainingAdvisor {
    pub fn new(thresholds: TrainingThresholds) -> Self {
        TrainingAdvisor { thresholds }
    }

    pub fn thresholds(&self) -> &TrainingThresholds {
        &self.thresholds
    }

    /// Pick a nature from the offensive bias, then speed, then the stronger defence.
    /// Ties between the defences fall through to a neutral nature.
    pub fn recommend_nature(&self, profile: &StatProfile) -> NatureName {
        let t = &self.thresholds;
        let attack = profile.attack as i32;
        let special_attack = profile.special_attack as i32;
        let margin = t.offense_bias_margin as i32;

        let nature = if attack - special_attack > margin {
            if profile.speed > t.fast_attacker_speed {
                NatureName::Jolly
            } else {
                NatureName::Adamant
            }
        } else if special_attack - attack > margin {
            if profile.speed > t.fast_attacker_speed {
                NatureName::Timid
            } else {
                NatureName::Modest
            }
        } else if profile.speed > t.fast_balanced_speed {
            NatureName::Hasty
        } else if profile.defense > profile.special_defense {
            NatureName::Impish
        } else if profile.special_defense > profile.defense {
            NatureName::Careful
        } else {
            NatureName::Serious
        };

        debug!(nature = %nature, "recommended nature");
        nature
    }

    /// Two maxed stats plus a spare 4. Fast species invest in speed and their
    /// offence; slower ones in HP, offence and their better defence.
    pub fn recommend_evs(&self, profile: &StatProfile) -> StatSpread {
        let t = &self.thresholds;
        let offense = primary_offense(profile);
        let defense = primary_defense(profile);

        let mut evs = StatSpread::default();
        if profile.speed >= t.ev_speed_threshold {
            evs.set(offense, t.max_stat_evs);
            evs.set(StatKey::Speed, t.max_stat_evs);
            let complement = match offense {
                StatKey::Attack => StatKey::SpecialDefense,
                _ => StatKey::Defense,
            };
            evs.set(complement, t.spare_evs);
        } else {
            evs.set(StatKey::Hp, t.max_stat_evs);
            evs.set(offense, t.max_stat_evs);
            evs.set(defense, t.spare_evs);
        }

        debug!(
            offense = offense.api_name(),
            total = evs.total(),
            "recommended EV spread"
        );
        evs
    }

    /// Perfect IVs except where an offensive stat is clearly unused or the
    /// species is slow enough to want minimum speed.
    pub fn recommend_ivs(&self, profile: &StatProfile) -> StatSpread {
        let t = &self.thresholds;
        let attack = profile.attack as i32;
        let special_attack = profile.special_attack as i32;
        let margin = t.iv_offense_margin as i32;

        let mut ivs = StatSpread::uniform(t.max_iv);
        if special_attack > attack + margin {
            ivs.attack = t.min_iv;
        }
        if attack > special_attack + margin {
            ivs.special_attack = t.min_iv;
        }
        if profile.speed < t.slow_speed_threshold {
            ivs.speed = t.min_iv;
        }
        ivs
    }

    pub fn recommend_training(&self, profile: &StatProfile) -> TrainingPlan {
        TrainingPlan {
            nature: self.recommend_nature(profile),
            evs: self.recommend_evs(profile),
            ivs: self.recommend_ivs(profile),
        }
    }
}

/// Attack when it is strictly higher, otherwise special attack.
fn primary_offense(profile: &StatProfile) -> StatKey {
    if profile.attack > profile.special_attack {
        StatKey::Attack
    } else {
        StatKey::SpecialAttack
    }
}

/// Defense when it is strictly higher, otherwise special defense.
fn primary_defense(profile: &StatProfile) -> StatKey {
    if profile.defense > profile.special_defense {
        StatKey::Defense
    } else {
        StatKey::SpecialDefense
    }
}

pub fn recommend_nature(profile: &StatProfile) -> NatureName {
    TrainingAdvisor::default().recommend_nature(profile)
}

pub fn recommend_evs(profile: &StatProfile) -> StatSpread {
    TrainingAdvisor::default().recommend_evs(profile)
}

pub fn recommend_ivs(profile: &StatProfile) -> StatSpread {
    TrainingAdvisor::default().recommend_ivs(profile)
}

pub fn recommend_training(profile: &StatProfile) -> TrainingPlan {
    TrainingAdvisor::default().recommend_training(profile)
}
