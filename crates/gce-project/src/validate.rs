//! Configuration validation.
//!
//! This is the only place values are checked; the update rules accept
//! anything.

use crate::schema::{InfallSourceDef, RunConfig};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing field: {field} ({reason})")]
    MissingField { field: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    gce_core::ensure_finite(value, "config value")
        .map_err(|_| invalid(field, value, "must be finite"))
}

pub fn validate_config(config: &RunConfig) -> Result<(), ValidationError> {
    if config.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    if config.name.trim().is_empty() {
        return Err(invalid("name", "\"\"", "must not be empty"));
    }

    let model = &config.model;
    let r = finite("model.return_fraction", model.return_fraction)?;
    if !(0.0..=1.0).contains(&r) {
        return Err(invalid("model.return_fraction", r, "must lie in [0, 1]"));
    }
    finite("model.outflow_efficiency", model.outflow_efficiency)?;
    finite("model.metal_yield", model.metal_yield)?;
    finite("model.infall_metallicity", model.infall_metallicity)?;

    let sf = &model.star_formation;
    finite("model.star_formation.efficiency", sf.efficiency)?;
    finite("model.star_formation.critical_mass", sf.critical_mass)?;
    let tdy = finite("model.star_formation.dynamical_time", sf.dynamical_time)?;
    if tdy == 0.0 {
        return Err(invalid(
            "model.star_formation.dynamical_time",
            tdy,
            "must be non-zero",
        ));
    }

    if let InfallSourceDef::Constant { beta } = model.infall {
        finite("model.infall.beta", beta)?;
    }

    if config.version >= 2 {
        if model.infall_model.is_none() {
            return Err(ValidationError::MissingField {
                field: "model.infall_model".to_string(),
                reason: "choose rate_only or rate_times_sfr".to_string(),
            });
        }
        if model.stellar_metal_model.is_none() {
            return Err(ValidationError::MissingField {
                field: "model.stellar_metal_model".to_string(),
                reason: "choose yield_difference or return_corrected".to_string(),
            });
        }
    }

    let ic = &config.initial;
    finite("initial.t0", ic.t0)?;
    finite("initial.m_gas", ic.m_gas)?;
    finite("initial.m_star", ic.m_star)?;
    finite("initial.mz_gas", ic.mz_gas)?;
    finite("initial.mz_star", ic.mz_star)?;

    let integ = &config.integration;
    let dt = finite("integration.dt", integ.dt)?;
    if dt <= 0.0 {
        return Err(invalid("integration.dt", dt, "must be positive"));
    }
    let t_end = finite("integration.t_end", integ.t_end)?;
    if t_end < ic.t0 {
        return Err(invalid(
            "integration.t_end",
            t_end,
            "must not precede initial.t0",
        ));
    }
    if integ.max_steps == 0 {
        return Err(invalid("integration.max_steps", 0, "must be positive"));
    }
    if integ.record_every == 0 {
        return Err(invalid("integration.record_every", 0, "must be positive"));
    }

    Ok(())
}
