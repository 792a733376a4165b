//! Move power, accuracy and PP as they were in a given version group.

use crate::versions::move_available_in;
use schema::{TypeName, VersionGroupId};
use serde::{Deserialize, Serialize};

/// Values a move had before a later generation changed them.
/// Fields left as `None` did not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastMoveValues {
    pub version_group: VersionGroupId,
    #[serde(default)]
    pub power: Option<u16>,
    #[serde(default)]
    pub accuracy: Option<u8>,
    #[serde(default)]
    pub pp: Option<u8>,
    #[serde(default)]
    pub move_type: Option<TypeName>,
}

/// Current battle values of a move plus its history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStats {
    pub id: u32,
    pub name: String,
    pub power: Option<u16>,
    pub accuracy: Option<u8>,
    pub pp: Option<u8>,
    pub move_type: Option<TypeName>,
    #[serde(default)]
    pub past_values: Vec<PastMoveValues>,
}

/// Move values resolved for one version group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionedMoveStats {
    pub power: Option<u16>,
    pub accuracy: Option<u8>,
    pub pp: Option<u8>,
    pub move_type: TypeName,
}

impl MoveStats {
    /// Use the past-values entry for `version_group` where it has a value and
    /// the current value otherwise. A move with no known type is normal.
    pub fn for_version(&self, version_group: &VersionGroupId) -> VersionedMoveStats {
        let past = self
            .past_values
            .iter()
            .find(|pv| &pv.version_group == version_group);

        VersionedMoveStats {
            power: past.and_then(|pv| pv.power).or(self.power),
            accuracy: past.and_then(|pv| pv.accuracy).or(self.accuracy),
            pp: past.and_then(|pv| pv.pp).or(self.pp),
            move_type: past
                .and_then(|pv| pv.move_type)
                .or(self.move_type)
                .unwrap_or(TypeName::Normal),
        }
    }

    pub fn available_in(&self, version_group: &VersionGroupId) -> bool {
        move_available_in(self.id, version_group)
    }
}

/// Moves from a library that existed by the version group's generation.
pub fn moves_in_version<'a>(
    library: &'a [MoveStats],
    version_group: &VersionGroupId,
) -> Vec<&'a MoveStats> {
    library
        .iter()
        .filter(|m| m.available_in(version_group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bite() -> MoveStats {
        MoveStats {
            id: 44,
            name: "bite".to_string(),
            power: Some(60),
            accuracy: Some(100),
            pp: Some(25),
            move_type: Some(TypeName::Dark),
            past_values: vec![PastMoveValues {
                version_group: "red-blue".into(),
                power: None,
                accuracy: None,
                pp: None,
                move_type: Some(TypeName::Normal),
            }],
        }
    }

    #[test]
    fn test_past_values_override_field_by_field() {
        let old = bite().for_version(&"red-blue".into());
        assert_eq!(
            old,
            VersionedMoveStats {
                power: Some(60),
                accuracy: Some(100),
                pp: Some(25),
                move_type: TypeName::Normal,
            }
        );
        assert_eq!(bite().for_version(&"x-y".into()).move_type, TypeName::Dark);
    }

    #[test]
    fn test_unknown_type_defaults_to_normal() {
        let mut status = bite();
        status.move_type = None;
        status.past_values.clear();
        status.power = None;
        let resolved = status.for_version(&"x-y".into());
        assert_eq!(resolved.move_type, TypeName::Normal);
        assert_eq!(resolved.power, None);
    }

    #[test]
    fn test_library_filtered_by_generation() {
        let mut shadow_ball = bite();
        shadow_ball.id = 247;
        shadow_ball.name = "shadow-ball".to_string();
        let library = vec![bite(), shadow_ball];

        let gen1: Vec<&str> = moves_in_version(&library, &"yellow".into())
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(gen1, vec!["bite"]);
        assert_eq!(moves_in_version(&library, &"crystal".into()).len(), 2);
    }
}
