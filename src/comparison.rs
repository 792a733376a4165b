//! Side-by-side base stat comparison of two creatures.

use schema::{StatKey, StatProfile};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatWinner {
    First,
    Second,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatComparison {
    pub stat: StatKey,
    pub first: u16,
    pub second: u16,
    pub winner: StatWinner,
}

/// Compares each stat in canonical order. A side only wins against a nonzero
/// opponent, since a 0 means the stat was missing from the record.
pub fn compare_stats(first: &StatProfile, second: &StatProfile) -> Vec<StatComparison> {
    StatKey::ALL
        .iter()
        .map(|&stat| {
            let a = first.get(stat);
            let b = second.get(stat);
            let winner = if a > b && b > 0 {
                StatWinner::First
            } else if b > a && a > 0 {
                StatWinner::Second
            } else {
                StatWinner::Tie
            };
            StatComparison {
                stat,
                first: a,
                second: b,
                winner,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::base_stats;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn profile_with(stat: StatKey, value: u16) -> StatProfile {
        let mut profile = StatProfile::default();
        profile.set(stat, value);
        profile
    }

    #[rstest]
    #[case("First higher", 100, 80, StatWinner::First)]
    #[case("Second higher", 45, 90, StatWinner::Second)]
    #[case("Equal", 70, 70, StatWinner::Tie)]
    #[case("Missing on second side", 100, 0, StatWinner::Tie)]
    #[case("Missing on first side", 0, 100, StatWinner::Tie)]
    #[case("Missing on both sides", 0, 0, StatWinner::Tie)]
    fn test_speed_comparison(
        #[case] desc: &str,
        #[case] first: u16,
        #[case] second: u16,
        #[case] expected: StatWinner,
    ) {
        let rows = compare_stats(
            &profile_with(StatKey::Speed, first),
            &profile_with(StatKey::Speed, second),
        );
        let speed = rows
            .iter()
            .find(|row| row.stat == StatKey::Speed)
            .unwrap();
        assert_eq!((speed.first, speed.second), (first, second), "{}", desc);
        assert_eq!(speed.winner, expected, "{}", desc);
    }

    #[test]
    fn test_rows_follow_stat_order() {
        let gengar = base_stats(60, 65, 60, 130, 75, 110);
        let alakazam = base_stats(55, 50, 45, 135, 95, 120);
        let rows = compare_stats(&gengar, &alakazam);
        assert_eq!(
            rows.iter().map(|r| (r.stat, r.winner)).collect::<Vec<_>>(),
            vec![
                (StatKey::Hp, StatWinner::First),
                (StatKey::Attack, StatWinner::First),
                (StatKey::Defense, StatWinner::First),
                (StatKey::SpecialAttack, StatWinner::Second),
                (StatKey::SpecialDefense, StatWinner::Second),
                (StatKey::Speed, StatWinner::Second),
            ]
        );
    }
}
