//! Closure relations coupling the reservoirs: star formation from the gas
//! mass, infall from star formation.

use crate::params::ModelParams;
use gce_core::Real;
use serde::{Deserialize, Serialize};

/// Star-formation rate `alp_e·(mg − mc) / tdy`.
///
/// `tdy = 0` yields ±Inf or NaN. Gas below the threshold `mc` gives a
/// negative rate, which is returned unchanged.
#[inline]
pub fn star_formation_rate(alp_e: Real, mg: Real, mc: Real, tdy: Real) -> Real {
    alp_e * (mg - mc) / tdy
}

/// Infall rate `(1 − R)·sfr`.
#[inline]
pub fn infall_rate(r: Real, sfr: Real) -> Real {
    (1.0 - r) * sfr
}

/// Threshold star-formation law.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SfrLaw {
    /// Star-formation efficiency `alp_e`
    pub efficiency: Real,
    /// Gas mass below which no stars form `mc`
    pub critical_mass: Real,
    /// Dynamical time `tdy`
    pub dynamical_time: Real,
}

impl Default for SfrLaw {
    fn default() -> Self {
        Self {
            efficiency: 0.01,
            critical_mass: 0.0,
            dynamical_time: 1.0,
        }
    }
}

impl SfrLaw {
    pub fn rate(&self, m_gas: Real) -> Real {
        star_formation_rate(
            self.efficiency,
            m_gas,
            self.critical_mass,
            self.dynamical_time,
        )
    }
}

/// Where the infall rate comes from each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InfallSource {
    /// `beta = infall_rate(R, sfr)`
    #[default]
    Closure,
    /// Fixed `beta` for the whole run.
    Constant { beta: Real },
}

/// Rates in effect during one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rates {
    pub sfr: Real,
    pub beta: Real,
}

impl Rates {
    /// Evaluate both closures from the current gas mass.
    pub fn evaluate(params: &ModelParams, m_gas: Real) -> Self {
        Self::from_sfr(params, params.sfr_law.rate(m_gas))
    }

    /// Derive the infall rate for an already known star-formation rate.
    pub fn from_sfr(params: &ModelParams, sfr: Real) -> Self {
        let beta = match params.infall_source {
            InfallSource::Closure => infall_rate(params.return_fraction, sfr),
            InfallSource::Constant { beta } => beta,
        };
        Self { sfr, beta }
    }
}
