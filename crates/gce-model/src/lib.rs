//! One-zone galactic chemical evolution model.
//!
//! Provides:
//! - Per-process update rules of the explicit Euler scheme (gas, stars, metals,
//!   stellar populations), assuming instantaneous mixing
//! - Star-formation and infall closure relations
//! - Model variants for the two revisions of the infall and stellar-metal terms
//! - The passive galaxy state container

pub mod closure;
pub mod increments;
pub mod params;
pub mod rules;
pub mod state;
pub mod variant;

// Re-exports for public API
pub use closure::{InfallSource, Rates, SfrLaw, infall_rate, star_formation_rate};
pub use increments::{GasTerms, StepIncrements};
pub use params::ModelParams;
pub use rules::*;
pub use state::{FIELD_NAMES, GalaxyState, InitialConditions, STATE_SIZE};
pub use variant::{InfallModel, ModelVariant, StellarMetalModel};
