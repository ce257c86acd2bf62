//! Run configuration schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    pub version: u32,
    pub name: String,
    pub model: ModelDef,
    pub initial: InitialDef,
    pub integration: IntegrationDef,
    #[serde(default)]
    pub policy: PolicyDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDef {
    #[serde(default = "default_return_fraction")]
    pub return_fraction: f64,
    #[serde(default)]
    pub outflow_efficiency: f64,
    #[serde(default = "default_metal_yield")]
    pub metal_yield: f64,
    #[serde(default)]
    pub infall_metallicity: f64,
    pub star_formation: StarFormationDef,
    #[serde(default)]
    pub infall: InfallSourceDef,
    /// Required from version 2 on; version 1 files are migrated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infall_model: Option<InfallModelDef>,
    /// Required from version 2 on; version 1 files are migrated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_metal_model: Option<StellarMetalModelDef>,
}

fn default_return_fraction() -> f64 {
    0.43
}

fn default_metal_yield() -> f64 {
    0.02
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarFormationDef {
    pub efficiency: f64,
    #[serde(default)]
    pub critical_mass: f64,
    pub dynamical_time: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InfallSourceDef {
    #[default]
    Closure,
    Constant {
        beta: f64,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InfallModelDef {
    RateOnly,
    RateTimesSfr,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StellarMetalModelDef {
    YieldDifference,
    ReturnCorrected,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InitialDef {
    #[serde(default)]
    pub t0: f64,
    pub m_gas: f64,
    #[serde(default)]
    pub m_star: f64,
    #[serde(default)]
    pub mz_gas: f64,
    #[serde(default)]
    pub mz_star: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntegrationDef {
    pub dt: f64,
    pub t_end: f64,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
}

fn default_max_steps() -> usize {
    1_000_000
}

fn default_record_every() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicyDef {
    #[serde(default)]
    pub clamp_negative_sfr: bool,
    #[serde(default = "default_true")]
    pub recompute_metallicity: bool,
    #[serde(default)]
    pub reject_non_finite: bool,
}

impl Default for PolicyDef {
    fn default() -> Self {
        Self {
            clamp_negative_sfr: false,
            recompute_metallicity: true,
            reject_non_finite: false,
        }
    }
}

fn default_true() -> bool {
    true
}
