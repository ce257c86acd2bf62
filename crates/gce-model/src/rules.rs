//! Explicit Euler update rules.
//!
//! Each function returns the change one physical process contributes to a
//! reservoir over a step of length `t`. All of them are pure arithmetic:
//! inputs are never validated and degenerate values (negative masses, NaN,
//! Inf) propagate into the result.
//!
//! Operand order follows the reference formulas exactly so that results
//! reproduce reference output bit for bit.

use crate::variant::{InfallModel, StellarMetalModel};
use gce_core::Real;

/// Mass returned to the gas by stellar evolution, net of the mass locked
/// into stars: `(R·sfr − sfr)·t`.
#[inline]
pub fn gas_enrichment(sfr: Real, r: Real, t: Real) -> Real {
    (r * sfr - sfr) * t
}

/// Gas ejected by feedback-driven outflow: `−alp·sfr·t`.
#[inline]
pub fn gas_outflow(sfr: Real, alp: Real, t: Real) -> Real {
    -alp * sfr * t
}

/// Gas accreted from outside the box.
#[inline]
pub fn gas_infall(model: InfallModel, sfr: Real, bta: Real, t: Real) -> Real {
    match model {
        InfallModel::RateOnly => bta * t,
        InfallModel::RateTimesSfr => bta * sfr * t,
    }
}

/// Net mass locked into long-lived stars: `(sfr − R·sfr)·t`.
#[inline]
pub fn stellar_mass(sfr: Real, r: Real, t: Real) -> Real {
    (sfr - r * sfr) * t
}

/// New metals returned by stellar yields, net of metals carried into stars:
/// `(yz·sfr − zg·sfr)·t`.
#[inline]
pub fn gas_metal_enrichment(zg: Real, sfr: Real, yz: Real, t: Real) -> Real {
    (yz * sfr - zg * sfr) * t
}

/// Metals leaving with the outflow at the current gas metallicity:
/// `−alp·zg·sfr·t`.
#[inline]
pub fn gas_metal_outflow(zg: Real, sfr: Real, alp: Real, t: Real) -> Real {
    -alp * zg * sfr * t
}

/// Metals carried in by infalling gas of metallicity `znf`.
#[inline]
pub fn gas_metal_infall(model: InfallModel, sfr: Real, bta: Real, znf: Real, t: Real) -> Real {
    match model {
        InfallModel::RateOnly => bta * znf * t,
        InfallModel::RateTimesSfr => bta * znf * sfr * t,
    }
}

/// Metals locked into stars this step. `yz` is read only by
/// [`StellarMetalModel::YieldDifference`], `r` only by
/// [`StellarMetalModel::ReturnCorrected`].
#[inline]
pub fn stellar_metal_mass(
    model: StellarMetalModel,
    zg: Real,
    sfr: Real,
    yz: Real,
    r: Real,
    t: Real,
) -> Real {
    match model {
        StellarMetalModel::YieldDifference => (zg * sfr - yz * sfr) * t,
        StellarMetalModel::ReturnCorrected => (zg * sfr - zg * r * sfr) * t,
    }
}

/// Mass of the stellar population born this step: `(1 − R)·sfr·t`.
#[inline]
pub fn stellar_population_mass(sfr: Real, r: Real, t: Real) -> Real {
    (1.0 - r) * sfr * t
}

/// Metal content of the population born this step: `zg·(1 − R)·sfr·t`.
#[inline]
pub fn stellar_population_metal_mass(zg: Real, sfr: Real, r: Real, t: Real) -> Real {
    zg * (1.0 - r) * sfr * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const SFR: Real = 2.0;
    const R: Real = 0.43;
    const ALP: Real = 0.1;
    const BTA: Real = 0.2;
    const ZNF: Real = 0.05;
    const ZG: Real = 0.01;
    const YZ: Real = 0.02;
    const T: Real = 1.0;

    fn close(a: Real, b: Real) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn gas_terms_match_hand_values() {
        assert!(close(gas_enrichment(SFR, R, T), -1.14));
        assert!(close(gas_outflow(SFR, ALP, T), -0.2));
        assert!(close(gas_infall(InfallModel::RateOnly, SFR, BTA, T), 0.2));
        assert!(close(gas_infall(InfallModel::RateTimesSfr, SFR, BTA, T), 0.4));
    }

    #[test]
    fn stellar_terms_match_hand_values() {
        assert!(close(stellar_mass(SFR, R, T), 1.14));
        assert!(close(stellar_population_mass(SFR, R, T), 1.14));
        assert!(close(stellar_population_metal_mass(ZG, SFR, R, T), 0.0114));
    }

    #[test]
    fn metal_terms_match_hand_values() {
        assert!(close(gas_metal_enrichment(ZG, SFR, YZ, T), 0.02));
        assert!(close(gas_metal_outflow(ZG, SFR, ALP, T), -0.002));
        assert!(close(
            gas_metal_infall(InfallModel::RateOnly, SFR, BTA, ZNF, T),
            0.01
        ));
        assert!(close(
            gas_metal_infall(InfallModel::RateTimesSfr, SFR, BTA, ZNF, T),
            0.02
        ));
    }

    #[test]
    fn stellar_metal_variants_differ() {
        let yield_diff =
            stellar_metal_mass(StellarMetalModel::YieldDifference, ZG, SFR, YZ, R, T);
        let return_corr =
            stellar_metal_mass(StellarMetalModel::ReturnCorrected, ZG, SFR, YZ, R, T);
        assert!(close(yield_diff, -0.02));
        assert!(close(return_corr, 0.0114));
    }

    #[test]
    fn enrichment_and_locking_cancel() {
        // Gas lost to star formation reappears as stellar mass.
        let sum = gas_enrichment(SFR, R, T) + stellar_mass(SFR, R, T);
        assert_eq!(sum, 0.0);
    }

    #[test]
    fn degenerate_inputs_propagate() {
        assert!(gas_enrichment(Real::NAN, R, T).is_nan());
        assert!(stellar_mass(SFR, R, Real::INFINITY).is_infinite());
        // Negative rates are accepted as-is.
        assert!(close(stellar_mass(-SFR, R, T), -1.14));
    }
}
