// In: src/lib.rs

//! Pokedex Reference Engine
//!
//! Pure computations over already-retrieved Pokedex records: type matchups,
//! competitive training recommendations, version-aware movesets and
//! evolution requirement labels. No I/O and no hidden state; every function
//! returns a derived value from its inputs and the static reference tables.

// --- MODULE DECLARATIONS ---
pub mod breeding;
pub mod comparison;
pub mod effectiveness;
pub mod errors;
pub mod evolution;
pub mod format;
pub mod move_stats;
pub mod moveset;
pub mod natures;
pub mod pokeapi;
pub mod species;
pub mod training;
pub mod versions;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Record types and static enums.
pub use schema::{
    // Evolution trees
    EvolutionNode,
    LevelUpConditions,
    SpeciesRef,
    TransitionDetail,
    // Learnsets
    LearnMethod,
    MoveLearnRecord,
    VersionGroupDetail,
    VersionGroupId,
    // Stats and natures
    NatureModifier,
    NatureName,
    StatKey,
    StatProfile,
    StatSpread,
    // Types
    TypeName,
};

// --- From this crate's modules (`src/`) ---

// Type effectiveness.
pub use effectiveness::{
    compute_effectiveness, compute_effectiveness_by_name, DefensiveProfile, Effectiveness,
    EffectivenessBucket,
};

// Training recommendations.
pub use training::{
    recommend_evs, recommend_ivs, recommend_nature, recommend_training, TrainingAdvisor,
    TrainingPlan, TrainingThresholds,
};
pub use natures::{nature_rationale, nature_stat_multiplier, search_natures};

// Movesets and version groups.
pub use move_stats::{MoveStats, VersionedMoveStats};
pub use moveset::{
    available_version_groups, describe_learnability, list_moves, recommend_moveset,
    resolve_moves, target_version, LearnAvailability, ResolvedMove,
};
pub use versions::{generation_of, select_default_version};

// Evolution.
pub use evolution::{describe_requirement, describe_transition, evolution_stages, walk};

// Species list and comparison.
pub use comparison::{compare_stats, StatComparison, StatWinner};
pub use species::{
    classify_species, filter_species, is_legendary_or_mythical, is_ultra_beast, SpeciesFilter,
    SpeciesListing, SpeciesStatus,
};

pub use breeding::GenderRatio;
pub use format::display_name;

// Crate-specific error and result types.
pub use errors::{
    EngineError, EngineResult, EvolutionDataError, EvolutionDataResult, RecordError,
    RecordResult, TypeDataError, TypeDataResult,
};
