// Pokedex Engine Schema - Shared type definitions
// This crate contains the closed enumerations and plain value records that the
// engine crate consumes: types, stats, natures, learnsets and evolution trees.

// Re-export the main types
pub use natures::*;
pub use pokemon_types::*;
pub use species_data::*;
pub use stats::*;

pub mod natures;
pub mod pokemon_types;
pub mod species_data;
pub mod stats;
