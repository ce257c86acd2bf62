//! Reference driver: one explicit Euler step of the one-zone model.
//!
//! Per step:
//! 1. star-formation and infall rates from the current gas mass
//! 2. every update rule at the current gas metallicity
//! 3. gas and gas-metal terms added in the order enrichment, outflow, infall;
//!    stellar terms accumulated; stellar-population fields overwritten
//! 4. metallicities recomputed (if enabled) and time advanced

use crate::error::{SimError, SimResult};
use crate::integrator::ForwardEuler;
use crate::model::TransientModel;
use gce_core::{Real, mass_fraction};
use gce_model::{
    FIELD_NAMES, GalaxyState, InitialConditions, ModelParams, Rates, StepIncrements,
};
use tracing::warn;

/// Optional guards around the unguarded reference arithmetic.
///
/// The defaults reproduce reference output exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepPolicy {
    /// Treat a negative star-formation rate (gas below threshold) as zero.
    pub clamp_negative_sfr: bool,
    /// Refresh `z_gas` and `z_star` from the metal and total masses after
    /// every step. An empty reservoir keeps its previous metallicity.
    pub recompute_metallicity: bool,
    /// Fail the step when any state field becomes NaN or infinite.
    pub reject_non_finite: bool,
}

impl Default for StepPolicy {
    fn default() -> Self {
        Self {
            clamp_negative_sfr: false,
            recompute_metallicity: true,
            reject_non_finite: false,
        }
    }
}

/// Everything evaluated at the start of a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerStep {
    pub rates: Rates,
    /// Gas metallicity the rules were evaluated at
    pub zg: Real,
    pub increments: StepIncrements,
}

/// One-zone galaxy integrated with forward Euler.
#[derive(Clone, Debug)]
pub struct OneBoxModel {
    pub params: ModelParams,
    pub initial: InitialConditions,
    pub policy: StepPolicy,
    negative_gas_reported: bool,
}

impl OneBoxModel {
    pub fn new(params: ModelParams, initial: InitialConditions) -> Self {
        Self {
            params,
            initial,
            policy: StepPolicy::default(),
            negative_gas_reported: false,
        }
    }

    pub fn with_policy(mut self, policy: StepPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Closure rates for state `x` under the current policy.
    pub fn rates(&self, x: &GalaxyState) -> Rates {
        let mut sfr = self.params.sfr_law.rate(x.m_gas);
        // Comparison keeps NaN intact, unlike f64::max.
        if self.policy.clamp_negative_sfr && sfr < 0.0 {
            sfr = 0.0;
        }
        Rates::from_sfr(&self.params, sfr)
    }

    /// Advance `x` by a single step of length `dt`.
    pub fn step_once(&mut self, x: &GalaxyState, dt: Real) -> SimResult<GalaxyState> {
        ForwardEuler.step(self, x.t, x, dt)
    }

    fn check_finite(state: &GalaxyState) -> SimResult<()> {
        for (name, value) in FIELD_NAMES.iter().zip(state.to_vector()) {
            if !value.is_finite() {
                return Err(SimError::NonFinite {
                    what: *name,
                    t: state.t,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl TransientModel for OneBoxModel {
    type State = GalaxyState;
    type Increments = EulerStep;

    fn initial_state(&self) -> GalaxyState {
        GalaxyState::from_initial(&self.initial)
    }

    fn initial_time(&self) -> f64 {
        self.initial.t0
    }

    fn increments(&mut self, _t: f64, x: &GalaxyState, dt: f64) -> SimResult<EulerStep> {
        let rates = self.rates(x);
        let zg = x.z_gas;
        Ok(EulerStep {
            rates,
            zg,
            increments: StepIncrements::compute(&self.params, &rates, zg, dt),
        })
    }

    fn apply(
        &mut self,
        _t: f64,
        x: &GalaxyState,
        step: &EulerStep,
        dt: f64,
    ) -> SimResult<GalaxyState> {
        let inc = &step.increments;
        let mut next = *x;

        next.m_gas = inc.gas.apply_to(x.m_gas);
        next.mz_gas = inc.metals.apply_to(x.mz_gas);
        next.m_star += inc.stellar_mass;
        next.mz_star += inc.stellar_metals;

        next.m_star_sp = inc.population_mass;
        next.mz_star_sp = inc.population_metals;
        next.z_star_sp = step.zg;
        next.sfr = step.rates.sfr;
        next.beta = step.rates.beta;

        if self.policy.recompute_metallicity {
            if next.m_gas != 0.0 {
                next.z_gas = mass_fraction(next.mz_gas, next.m_gas);
            }
            if next.m_star != 0.0 {
                next.z_star = mass_fraction(next.mz_star, next.m_star);
            }
        }

        next.t = x.t + dt;

        if next.m_gas < 0.0 && !self.negative_gas_reported {
            warn!(
                t = next.t,
                m_gas = next.m_gas,
                "gas reservoir went negative; step size or parameters are outside the physical regime"
            );
            self.negative_gas_reported = true;
        }

        if self.policy.reject_non_finite {
            Self::check_finite(&next)?;
        }

        Ok(next)
    }
}
