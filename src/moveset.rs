//! Version-aware filtering and ranking of a creature's learnset.

use crate::format::learn_method_label;
use crate::versions::{select_default_version, VERSION_GROUPS};
use schema::{LearnMethod, MoveLearnRecord, VersionGroupId};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Most moves a creature can know at once.
pub const MOVESET_SIZE: usize = 4;

/// A learn record that matched a version group and method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove<'a> {
    pub record: &'a MoveLearnRecord,
    /// Present only for level-up learning.
    pub level: Option<u8>,
}

impl<'a> ResolvedMove<'a> {
    pub fn move_name(&self) -> &'a str {
        &self.record.move_name
    }

    fn sort_level(&self) -> u8 {
        self.level.unwrap_or(0)
    }
}

/// Records learnable in `version_group` through `learn_method`, in input order.
pub fn resolve_moves<'a>(
    records: &'a [MoveLearnRecord],
    version_group: &VersionGroupId,
    learn_method: &LearnMethod,
) -> Vec<ResolvedMove<'a>> {
    records
        .iter()
        .filter_map(|record| {
            record
                .detail_for(version_group, learn_method)
                .map(|detail| ResolvedMove {
                    record,
                    level: learn_method
                        .carries_level()
                        .then_some(detail.level_learned_at),
                })
        })
        .collect()
}

/// Resolved moves in display order: ascending level for level-up, by name
/// otherwise. Both sorts are stable.
pub fn list_moves<'a>(
    records: &'a [MoveLearnRecord],
    version_group: &VersionGroupId,
    learn_method: &LearnMethod,
) -> Vec<ResolvedMove<'a>> {
    let mut moves = resolve_moves(records, version_group, learn_method);
    if learn_method.carries_level() {
        moves.sort_by_key(ResolvedMove::sort_level);
    } else {
        moves.sort_by(|a, b| a.move_name().cmp(b.move_name()));
    }
    moves
}

/// The highest-level level-up moves for the version group, at most four.
/// Equal levels keep input order.
pub fn recommend_moveset<'a>(
    records: &'a [MoveLearnRecord],
    version_group: &VersionGroupId,
) -> Vec<ResolvedMove<'a>> {
    let mut moves = resolve_moves(records, version_group, &LearnMethod::LevelUp);
    moves.sort_by_key(|m| Reverse(m.sort_level()));
    moves.truncate(MOVESET_SIZE);

    debug!(
        version_group = %version_group,
        moves = ?moves.iter().map(ResolvedMove::move_name).collect::<Vec<_>>(),
        "recommended moveset"
    );
    moves
}

/// Selectable version groups that appear anywhere in the learnset, newest first.
pub fn available_version_groups(records: &[MoveLearnRecord]) -> Vec<VersionGroupId> {
    let present: HashSet<&str> = records
        .iter()
        .flat_map(|record| record.version_details.iter())
        .map(|detail| detail.version_group.as_str())
        .collect();

    VERSION_GROUPS
        .iter()
        .filter(|entry| present.contains(entry.id))
        .map(|entry| VersionGroupId::from(entry.id))
        .collect()
}

/// The caller's choice when the learnset has it, otherwise the most recent
/// available version group.
pub fn target_version(
    records: &[MoveLearnRecord],
    manual: Option<&VersionGroupId>,
) -> VersionGroupId {
    let available = available_version_groups(records);
    match manual {
        Some(choice) if available.contains(choice) => choice.clone(),
        _ => select_default_version(&available),
    }
}

/// How (or whether) a creature learns one move in one version group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnAvailability {
    Learned {
        method: LearnMethod,
        level: Option<u8>,
    },
    /// The creature learns the move, just not in this version group.
    NotInVersion,
    /// The creature never learns the move.
    Unavailable,
}

impl fmt::Display for LearnAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnAvailability::Learned { method, level } => {
                write!(f, "{}", learn_method_label(method.as_str()))?;
                if let Some(level) = level {
                    write!(f, " (Lvl {})", level)?;
                }
                Ok(())
            }
            LearnAvailability::NotInVersion => write!(f, "Not in this version"),
            LearnAvailability::Unavailable => write!(f, "Unavailable"),
        }
    }
}

/// Summarise how `move_name` is learned in `version_group`, using the first
/// entry for that version group. A level of 0 is not shown.
pub fn describe_learnability(
    records: &[MoveLearnRecord],
    move_name: &str,
    version_group: &VersionGroupId,
) -> LearnAvailability {
    let Some(record) = records.iter().find(|r| r.move_name == move_name) else {
        return LearnAvailability::Unavailable;
    };
    match record.first_detail_in(version_group) {
        Some(detail) => LearnAvailability::Learned {
            method: detail.learn_method.clone(),
            level: (detail.level_learned_at > 0).then_some(detail.level_learned_at),
        },
        None => LearnAvailability::NotInVersion,
    }
}
