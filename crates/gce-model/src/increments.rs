//! Grouped increments for one explicit Euler step.

use crate::closure::Rates;
use crate::params::ModelParams;
use crate::rules;
use crate::variant::InfallModel;
use gce_core::Real;

/// Three additive terms of a gas-phase budget.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GasTerms {
    pub enrichment: Real,
    pub outflow: Real,
    pub infall: Real,
}

impl GasTerms {
    /// Sum in the fixed order enrichment, outflow, infall.
    pub fn total(&self) -> Real {
        self.enrichment + self.outflow + self.infall
    }

    /// Add the terms to `reservoir` one at a time. Infall is applied after
    /// outflow within a step.
    pub fn apply_to(&self, reservoir: Real) -> Real {
        let mut m = reservoir;
        m += self.enrichment;
        m += self.outflow;
        m += self.infall;
        m
    }
}

/// Gas-mass terms: stellar return, outflow, infall.
pub fn gas_mass_terms(
    model: InfallModel,
    sfr: Real,
    r: Real,
    alp: Real,
    bta: Real,
    t: Real,
) -> GasTerms {
    GasTerms {
        enrichment: rules::gas_enrichment(sfr, r, t),
        outflow: rules::gas_outflow(sfr, alp, t),
        infall: rules::gas_infall(model, sfr, bta, t),
    }
}

/// Gas-metal terms: yield enrichment, outflow, infall.
#[allow(clippy::too_many_arguments)]
pub fn gas_metal_terms(
    model: InfallModel,
    zg: Real,
    sfr: Real,
    yz: Real,
    alp: Real,
    bta: Real,
    znf: Real,
    t: Real,
) -> GasTerms {
    GasTerms {
        enrichment: rules::gas_metal_enrichment(zg, sfr, yz, t),
        outflow: rules::gas_metal_outflow(zg, sfr, alp, t),
        infall: rules::gas_metal_infall(model, sfr, bta, znf, t),
    }
}

/// Every increment of a single step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepIncrements {
    /// Added to `m_gas`
    pub gas: GasTerms,
    /// Added to `mz_gas`
    pub metals: GasTerms,
    /// Added to `m_star`
    pub stellar_mass: Real,
    /// Added to `mz_star`
    pub stellar_metals: Real,
    /// Replaces `m_star_sp`
    pub population_mass: Real,
    /// Replaces `mz_star_sp`
    pub population_metals: Real,
}

impl StepIncrements {
    /// Evaluate all update rules at gas metallicity `zg` over a step `t`.
    pub fn compute(params: &ModelParams, rates: &Rates, zg: Real, t: Real) -> Self {
        let r = params.return_fraction;
        let alp = params.outflow_efficiency;
        let yz = params.metal_yield;
        let Rates { sfr, beta } = *rates;
        let infall = params.variant.infall;

        Self {
            gas: gas_mass_terms(infall, sfr, r, alp, beta, t),
            metals: gas_metal_terms(
                infall,
                zg,
                sfr,
                yz,
                alp,
                beta,
                params.infall_metallicity,
                t,
            ),
            stellar_mass: rules::stellar_mass(sfr, r, t),
            stellar_metals: rules::stellar_metal_mass(
                params.variant.stellar_metals,
                zg,
                sfr,
                yz,
                r,
                t,
            ),
            population_mass: rules::stellar_population_mass(sfr, r, t),
            population_metals: rules::stellar_population_metal_mass(zg, sfr, r, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_to_adds_in_order() {
        let terms = GasTerms {
            enrichment: 1.0e16,
            outflow: -1.0e16,
            infall: 1.0,
        };
        // Enrichment and outflow cancel before infall is added.
        assert_eq!(terms.apply_to(0.0), 1.0);
        assert_eq!(terms.total(), 1.0);
    }

    #[test]
    fn gas_terms_group_the_rules() {
        let g = gas_mass_terms(InfallModel::RateTimesSfr, 2.0, 0.43, 0.1, 0.2, 1.0);
        assert_eq!(g.enrichment, rules::gas_enrichment(2.0, 0.43, 1.0));
        assert_eq!(g.outflow, rules::gas_outflow(2.0, 0.1, 1.0));
        assert_eq!(g.infall, 0.2 * 2.0 * 1.0);
    }
}
