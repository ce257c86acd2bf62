//! Translate a validated config into runtime model objects.

use gce_model::{
    InfallModel, InfallSource, InitialConditions, ModelParams, ModelVariant, SfrLaw,
    StellarMetalModel,
};
use gce_project::schema::{InfallModelDef, InfallSourceDef, RunConfig, StellarMetalModelDef};
use gce_sim::{OneBoxModel, SimOptions, StepPolicy};

use crate::error::{AppError, AppResult};

/// Everything needed to execute a config.
#[derive(Debug, Clone)]
pub struct CompiledRun {
    pub model: OneBoxModel,
    pub options: SimOptions,
}

fn infall_model(def: InfallModelDef) -> InfallModel {
    match def {
        InfallModelDef::RateOnly => InfallModel::RateOnly,
        InfallModelDef::RateTimesSfr => InfallModel::RateTimesSfr,
    }
}

fn stellar_metal_model(def: StellarMetalModelDef) -> StellarMetalModel {
    match def {
        StellarMetalModelDef::YieldDifference => StellarMetalModel::YieldDifference,
        StellarMetalModelDef::ReturnCorrected => StellarMetalModel::ReturnCorrected,
    }
}

pub fn compile_config(config: &RunConfig) -> AppResult<CompiledRun> {
    let m = &config.model;

    let variant = match (m.infall_model, m.stellar_metal_model) {
        (Some(infall), Some(metals)) => {
            ModelVariant::new(infall_model(infall), stellar_metal_model(metals))
        }
        _ => {
            return Err(AppError::InvalidInput(
                "model variant must be chosen before compiling".to_string(),
            ));
        }
    };

    let mut params = ModelParams::new(variant);
    params.return_fraction = m.return_fraction;
    params.outflow_efficiency = m.outflow_efficiency;
    params.metal_yield = m.metal_yield;
    params.infall_metallicity = m.infall_metallicity;
    params.sfr_law = SfrLaw {
        efficiency: m.star_formation.efficiency,
        critical_mass: m.star_formation.critical_mass,
        dynamical_time: m.star_formation.dynamical_time,
    };
    params.infall_source = match m.infall {
        InfallSourceDef::Closure => InfallSource::Closure,
        InfallSourceDef::Constant { beta } => InfallSource::Constant { beta },
    };

    let ic = &config.initial;
    let initial = InitialConditions {
        t0: ic.t0,
        m_gas: ic.m_gas,
        m_star: ic.m_star,
        mz_gas: ic.mz_gas,
        mz_star: ic.mz_star,
    };

    let policy = StepPolicy {
        clamp_negative_sfr: config.policy.clamp_negative_sfr,
        recompute_metallicity: config.policy.recompute_metallicity,
        reject_non_finite: config.policy.reject_non_finite,
    };

    let integ = &config.integration;
    let options = SimOptions {
        dt: integ.dt,
        t_end: integ.t_end,
        max_steps: integ.max_steps,
        record_every: integ.record_every,
    };

    Ok(CompiledRun {
        model: OneBoxModel::new(params, initial).with_policy(policy),
        options,
    })
}
