//! Physical parameters of a one-zone run.

use crate::closure::{InfallSource, SfrLaw};
use crate::variant::ModelVariant;
use gce_core::Real;
use serde::{Deserialize, Serialize};

/// Named model parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Fraction of formed stellar mass returned to the gas, `R`.
    pub return_fraction: Real,
    /// Outflow mass loading per unit star formation, `alp`.
    pub outflow_efficiency: Real,
    /// Metal mass produced per unit star formation, `yz`.
    pub metal_yield: Real,
    /// Metallicity of infalling gas, `znf`.
    pub infall_metallicity: Real,
    pub sfr_law: SfrLaw,
    pub infall_source: InfallSource,
    pub variant: ModelVariant,
}

impl ModelParams {
    pub const DEFAULT_RETURN_FRACTION: Real = 0.43;
    pub const DEFAULT_METAL_YIELD: Real = 0.02;

    /// Parameters with default physics for the given revision.
    pub fn new(variant: ModelVariant) -> Self {
        Self {
            return_fraction: Self::DEFAULT_RETURN_FRACTION,
            outflow_efficiency: 0.0,
            metal_yield: Self::DEFAULT_METAL_YIELD,
            infall_metallicity: 0.0,
            sfr_law: SfrLaw::default(),
            infall_source: InfallSource::default(),
            variant,
        }
    }
}
