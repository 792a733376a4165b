//! Type matchups against a one- or two-type defender.
//!
//! Each attacking type's multiplier is the product of the chart entries for
//! every defending type, so two weaknesses compound to 4x, a weakness and a
//! resistance cancel out, and any immunity zeroes the result.

use crate::errors::{TypeDataError, TypeDataResult};
use ordered_float::OrderedFloat;
use schema::TypeName;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::trace;

/// The one or two types of a defending creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefensiveProfile {
    primary: TypeName,
    secondary: Option<TypeName>,
}

impl DefensiveProfile {
    pub fn single(primary: TypeName) -> Self {
        DefensiveProfile {
            primary,
            secondary: None,
        }
    }

    /// A repeated type collapses to a single-type profile.
    pub fn dual(primary: TypeName, secondary: TypeName) -> Self {
        DefensiveProfile {
            primary,
            secondary: (secondary != primary).then_some(secondary),
        }
    }

    pub fn from_types(types: &[TypeName]) -> TypeDataResult<Self> {
        match types {
            [primary] => Ok(Self::single(*primary)),
            [primary, secondary] => Ok(Self::dual(*primary, *secondary)),
            _ => Err(TypeDataError::InvalidTypeCount(types.len())),
        }
    }

    /// Parse lowercase API names. Unknown names are rejected, never coerced.
    pub fn from_names(names: &[&str]) -> TypeDataResult<Self> {
        let types = names
            .iter()
            .map(|name| {
                TypeName::from_str(name).map_err(|_| TypeDataError::InvalidType(name.to_string()))
            })
            .collect::<TypeDataResult<Vec<TypeName>>>()?;
        Self::from_types(&types)
    }

    pub fn primary(&self) -> TypeName {
        self.primary
    }

    pub fn secondary(&self) -> Option<TypeName> {
        self.secondary
    }

    pub fn types(&self) -> impl Iterator<Item = TypeName> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

/// The notable multipliers a defender can take, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectivenessBucket {
    QuadrupleWeak,
    Weak,
    Resists,
    DoubleResists,
    Immune,
}

impl EffectivenessBucket {
    pub const ALL: [EffectivenessBucket; 5] = [
        EffectivenessBucket::QuadrupleWeak,
        EffectivenessBucket::Weak,
        EffectivenessBucket::Resists,
        EffectivenessBucket::DoubleResists,
        EffectivenessBucket::Immune,
    ];

    pub fn multiplier(self) -> f32 {
        match self {
            EffectivenessBucket::QuadrupleWeak => 4.0,
            EffectivenessBucket::Weak => 2.0,
            EffectivenessBucket::Resists => 0.5,
            EffectivenessBucket::DoubleResists => 0.25,
            EffectivenessBucket::Immune => 0.0,
        }
    }

    /// `None` for neutral (1x) and for any value outside the five buckets.
    pub fn from_multiplier(multiplier: f32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.multiplier() == multiplier)
    }
}

impl fmt::Display for EffectivenessBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EffectivenessBucket::QuadrupleWeak => "Weak to (4×)",
            EffectivenessBucket::Weak => "Weak to (2×)",
            EffectivenessBucket::Resists => "Resists (½×)",
            EffectivenessBucket::DoubleResists => "Resists (¼×)",
            EffectivenessBucket::Immune => "Immune to (0×)",
        };
        write!(f, "{}", label)
    }
}

/// Multiplier taken from every attacking type, neutral ones included.
#[derive(Debug, Clone, PartialEq)]
pub struct Effectiveness {
    multipliers: BTreeMap<TypeName, f32>,
}

impl Effectiveness {
    pub fn get(&self, attacking: TypeName) -> f32 {
        self.multipliers.get(&attacking).copied().unwrap_or(1.0)
    }

    /// All eighteen entries in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeName, f32)> + '_ {
        self.multipliers.iter().map(|(t, m)| (*t, *m))
    }

    /// Attacking types sorted into the five notable buckets. Every bucket is
    /// present, in strongest-first order; types inside keep chart order.
    pub fn grouped(&self) -> Vec<(EffectivenessBucket, Vec<TypeName>)> {
        EffectivenessBucket::ALL
            .into_iter()
            .map(|bucket| {
                let members = self
                    .iter()
                    .filter(|(_, m)| EffectivenessBucket::from_multiplier(*m) == Some(bucket))
                    .map(|(t, _)| t)
                    .collect();
                (bucket, members)
            })
            .collect()
    }

    pub fn in_bucket(&self, bucket: EffectivenessBucket) -> Vec<TypeName> {
        self.iter()
            .filter(|(_, m)| *m == bucket.multiplier())
            .map(|(t, _)| t)
            .collect()
    }

    /// Non-neutral matchups, highest multiplier first. Ties keep chart order.
    pub fn ranked(&self) -> Vec<(TypeName, f32)> {
        let mut notable: Vec<(TypeName, f32)> = self.iter().filter(|(_, m)| *m != 1.0).collect();
        notable.sort_by_key(|(_, m)| Reverse(OrderedFloat(*m)));
        notable
    }

    /// False when every attacking type is neutral.
    pub fn has_notable_matchups(&self) -> bool {
        self.iter().any(|(_, m)| m != 1.0)
    }
}

/// Multiplier of every attacking type against the defender.
pub fn compute_effectiveness(defender: DefensiveProfile) -> Effectiveness {
    let multipliers = TypeName::iter()
        .map(|attacking| {
            let multiplier = defender
                .types()
                .map(|defending| TypeName::chart_multiplier(attacking, defending))
                .product::<f32>();
            (attacking, multiplier)
        })
        .collect();

    trace!(
        primary = %defender.primary(),
        secondary = ?defender.secondary(),
        "computed type effectiveness"
    );
    Effectiveness { multipliers }
}

/// Convenience entry point over raw API names.
pub fn compute_effectiveness_by_name(defending: &[&str]) -> TypeDataResult<Effectiveness> {
    DefensiveProfile::from_names(defending).map(compute_effectiveness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::TypeName::*;

    #[test]
    fn test_single_type_matches_chart_row() {
        for defending in TypeName::iter() {
            let effectiveness = compute_effectiveness(DefensiveProfile::single(defending));
            for attacking in TypeName::iter() {
                assert_eq!(
                    effectiveness.get(attacking),
                    TypeName::chart_multiplier(attacking, defending),
                    "{} attacking {}",
                    attacking,
                    defending
                );
            }
        }
    }

    #[test]
    fn test_dual_type_is_product_of_chart_terms() {
        for a in TypeName::iter() {
            for b in TypeName::iter().filter(|b| *b != a) {
                let effectiveness = compute_effectiveness(DefensiveProfile::dual(a, b));
                for attacking in TypeName::iter() {
                    let expected = TypeName::chart_multiplier(attacking, a)
                        * TypeName::chart_multiplier(attacking, b);
                    assert_eq!(effectiveness.get(attacking), expected);
                }
            }
        }
    }

    #[rstest]
    #[case("Compounding weakness", Water, Ground, Rock, 4.0)]
    #[case("Compounding weakness", Ice, Grass, Flying, 4.0)]
    #[case("Immunity dominates", Ghost, Normal, Flying, 0.0)]
    #[case("Immunity dominates", Electric, Ground, Flying, 0.0)]
    #[case("Weakness and resistance cancel", Fire, Water, Grass, 1.0)]
    #[case("Compounding resistance", Grass, Fire, Flying, 0.25)]
    fn test_dual_type_stacking(
        #[case] desc: &str,
        #[case] attacking: TypeName,
        #[case] first: TypeName,
        #[case] second: TypeName,
        #[case] expected: f32,
    ) {
        let effectiveness = compute_effectiveness(DefensiveProfile::dual(first, second));
        assert_eq!(effectiveness.get(attacking), expected, "{}", desc);
    }

    #[test]
    fn test_output_covers_all_attacking_types() {
        let effectiveness = compute_effectiveness(DefensiveProfile::single(Normal));
        assert_eq!(effectiveness.iter().count(), 18);
        assert_eq!(effectiveness.get(Fire), 1.0);
    }

    #[test]
    fn test_grouping_into_buckets() {
        // Gyarados-like Water/Flying
        let effectiveness = compute_effectiveness_by_name(&["water", "flying"]).unwrap();
        let groups = effectiveness.grouped();

        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0], (EffectivenessBucket::QuadrupleWeak, vec![Electric]));
        assert_eq!(groups[1], (EffectivenessBucket::Weak, vec![Rock]));
        assert_eq!(
            groups[2],
            (EffectivenessBucket::Resists, vec![Fire, Water, Fighting, Bug, Steel])
        );
        assert_eq!(groups[3], (EffectivenessBucket::DoubleResists, vec![]));
        assert_eq!(groups[4], (EffectivenessBucket::Immune, vec![Ground]));
        assert!(effectiveness.has_notable_matchups());
    }

    #[test]
    fn test_ranked_puts_strongest_first() {
        let effectiveness = compute_effectiveness(DefensiveProfile::dual(Water, Flying));
        let ranked = effectiveness.ranked();
        assert_eq!(ranked.first(), Some(&(Electric, 4.0)));
        assert_eq!(ranked.last(), Some(&(Ground, 0.0)));
        assert!(ranked.iter().all(|(_, m)| *m != 1.0));
    }

    #[test]
    fn test_notable_matchups_ignores_neutral_entries() {
        let neutral = Effectiveness {
            multipliers: TypeName::iter().map(|t| (t, 1.0)).collect(),
        };
        assert!(!neutral.has_notable_matchups());
        assert!(neutral.ranked().is_empty());

        let mut one_weakness = neutral.clone();
        one_weakness.multipliers.insert(Rock, 2.0);
        assert!(one_weakness.has_notable_matchups());

        for defending in TypeName::iter() {
            assert!(compute_effectiveness(DefensiveProfile::single(defending)).has_notable_matchups());
        }
    }

    #[test]
    fn test_invalid_names_fail_loudly() {
        assert_eq!(
            compute_effectiveness_by_name(&["fire", "shadow"]),
            Err(TypeDataError::InvalidType("shadow".to_string()))
        );
        assert_eq!(
            compute_effectiveness_by_name(&[]),
            Err(TypeDataError::InvalidTypeCount(0))
        );
        assert_eq!(
            compute_effectiveness_by_name(&["fire", "water", "grass"]),
            Err(TypeDataError::InvalidTypeCount(3))
        );
    }

    #[test]
    fn test_repeated_type_is_not_squared() {
        let profile = DefensiveProfile::dual(Grass, Grass);
        assert_eq!(profile.secondary(), None);
        assert_eq!(compute_effectiveness(profile).get(Fire), 2.0);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(EffectivenessBucket::from_multiplier(1.0), None);
        assert_eq!(
            EffectivenessBucket::from_multiplier(0.25),
            Some(EffectivenessBucket::DoubleResists)
        );
        assert_eq!(EffectivenessBucket::Immune.to_string(), "Immune to (0×)");
    }
}
