//! Rendering evolution triggers as short requirement labels and walking
//! evolution trees.

use crate::errors::{EvolutionDataError, EvolutionDataResult};
use crate::format::display_name;
use schema::{EvolutionNode, LevelUpConditions, SpeciesRef, TransitionDetail, TypeName};
use std::collections::HashSet;
use tracing::trace;

const PHRASE_SEPARATOR: &str = " + ";

/// Requirement label for a single transition, e.g. `"Lvl 36"` or
/// `"Trade + Hold Metal Coat"`. Never empty.
pub fn describe_transition(detail: &TransitionDetail) -> String {
    let phrases = match detail {
        TransitionDetail::LevelUp(conditions) => level_up_phrases(conditions),
        TransitionDetail::UseItem { item } => vec![format!("Use {}", display_name(item))],
        TransitionDetail::Trade {
            held_item,
            trade_species,
        } => {
            let mut phrases = vec!["Trade".to_string()];
            if let Some(item) = non_blank(held_item) {
                phrases.push(format!("Hold {}", display_name(item)));
            }
            if let Some(species) = non_blank(trade_species) {
                phrases.push(format!("for {}", display_name(species)));
            }
            phrases
        }
        TransitionDetail::Shed => vec!["Shed (Empty slot)".to_string()],
        TransitionDetail::Spin => vec!["Spin".to_string()],
        TransitionDetail::TowerOfDarkness => vec!["Tower of Darkness".to_string()],
        TransitionDetail::TowerOfWaters => vec!["Tower of Waters".to_string()],
        TransitionDetail::ThreeCriticalHits => vec!["3 Crits in 1 Battle".to_string()],
        TransitionDetail::TakeDamage => vec!["Take Damage".to_string()],
        TransitionDetail::Other { kind } if kind.trim().is_empty() => vec!["Special".to_string()],
        TransitionDetail::Other { kind } => vec![display_name(kind)],
    };
    phrases.join(PHRASE_SEPARATOR)
}

fn level_up_phrases(c: &LevelUpConditions) -> Vec<String> {
    let mut phrases = Vec::new();

    // Zero thresholds carry no requirement
    if let Some(level) = c.min_level.filter(|l| *l > 0) {
        phrases.push(format!("Lvl {}", level));
    }
    if c.min_happiness.is_some_and(|v| v > 0) {
        phrases.push("Friendship".to_string());
    }
    if c.min_affection.is_some_and(|v| v > 0) {
        phrases.push("Affection".to_string());
    }
    if c.min_beauty.is_some_and(|v| v > 0) {
        phrases.push("Beauty".to_string());
    }
    if let Some(name) = non_blank(&c.known_move) {
        phrases.push(format!("Know {}", display_name(name)));
    }
    if let Some(move_type) = c.known_move_type {
        phrases.push(format!("{} Move", type_label(move_type)));
    }
    if let Some(location) = non_blank(&c.location) {
        phrases.push(format!("at {}", display_name(location)));
    }
    if let Some(time) = non_blank(&c.time_of_day) {
        phrases.push(display_name(time));
    }
    if let Some(item) = non_blank(&c.held_item) {
        phrases.push(format!("Hold {}", display_name(item)));
    }
    if c.needs_overworld_rain {
        phrases.push("Rain".to_string());
    }
    if c.turn_upside_down {
        phrases.push("Upside Down".to_string());
    }
    if let Some(species) = non_blank(&c.party_species) {
        phrases.push(format!("With {}", display_name(species)));
    }
    if let Some(party_type) = c.party_type {
        phrases.push(format!("With {} Type", type_label(party_type)));
    }

    if phrases.is_empty() {
        phrases.push("Level Up".to_string());
    }
    phrases
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn type_label(type_name: TypeName) -> String {
    display_name(type_name.api_name())
}

/// Label for the edge into a node. Only the first transition is described;
/// a root has none.
pub fn describe_requirement(incoming: &[TransitionDetail]) -> Option<String> {
    incoming.first().map(describe_transition)
}

/// Depth-first pre-order traversal: each node is visited before its children,
/// children in order. Runs on an explicit stack.
///
/// Returns [`EvolutionDataError::RepeatedSpecies`] if a species name occurs
/// twice; nodes before the repeat have already been visited.
pub fn walk<'a, F>(root: &'a EvolutionNode, mut visit: F) -> EvolutionDataResult<()>
where
    F: FnMut(&'a EvolutionNode, &'a [TransitionDetail]),
{
    walk_with_depth(root, |node, _| visit(node, &node.incoming))
}

fn walk_with_depth<'a, F>(root: &'a EvolutionNode, mut visit: F) -> EvolutionDataResult<()>
where
    F: FnMut(&'a EvolutionNode, usize),
{
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut stack: Vec<(&'a EvolutionNode, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        let name = node.species.name.as_str();
        if !seen.insert(name) {
            return Err(EvolutionDataError::RepeatedSpecies(name.to_string()));
        }
        trace!(species = name, depth, "visiting evolution node");
        visit(node, depth);

        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    Ok(())
}

/// One row of a rendered evolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub species: SpeciesRef,
    /// 0 for the base form.
    pub depth: usize,
    /// `None` for the base form.
    pub requirement: Option<String>,
}

/// Flatten a tree into pre-order stages with their requirement labels.
pub fn evolution_stages(root: &EvolutionNode) -> EvolutionDataResult<Vec<EvolutionStage>> {
    let mut stages = Vec::new();
    walk_with_depth(root, |node, depth| {
        stages.push(EvolutionStage {
            species: node.species.clone(),
            depth,
            requirement: describe_requirement(&node.incoming),
        })
    })?;
    Ok(stages)
}
