//! Model revisions for terms whose formula changed between model versions.

use serde::{Deserialize, Serialize};

/// How the infall rate enters the gas and gas-metal budgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfallModel {
    /// `beta` is an absolute rate: increment = `bta·t`.
    RateOnly,
    /// `beta` scales the star-formation rate: increment = `bta·sfr·t`.
    RateTimesSfr,
}

/// Which expression locks metals into long-lived stars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StellarMetalModel {
    /// `(zg·sfr − yz·sfr)·t`
    YieldDifference,
    /// `(zg·sfr − zg·R·sfr)·t`
    ReturnCorrected,
}

/// Complete variant selection. No `Default`: every
/// caller names the revision it integrates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelVariant {
    pub infall: InfallModel,
    pub stellar_metals: StellarMetalModel,
}

impl ModelVariant {
    /// Revision in which infall scales with star formation and stellar metals
    /// use the yield difference.
    pub const EARLIEST: Self = Self {
        infall: InfallModel::RateTimesSfr,
        stellar_metals: StellarMetalModel::YieldDifference,
    };

    pub fn new(infall: InfallModel, stellar_metals: StellarMetalModel) -> Self {
        Self {
            infall,
            stellar_metals,
        }
    }
}
