//! Schema migration framework.

use crate::ProjectError;
use crate::schema::{InfallModelDef, RunConfig, StellarMetalModelDef};

/// Version 1 predates explicit model variants; version 2 requires them.
pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut config: RunConfig) -> Result<RunConfig, ProjectError> {
    while config.version < LATEST_VERSION {
        config = migrate_one_version(config)?;
    }
    Ok(config)
}

fn migrate_one_version(config: RunConfig) -> Result<RunConfig, ProjectError> {
    match config.version {
        1 => migrate_v1_to_v2(config),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 1 files were written against the first model revision: infall
/// scaled by the star-formation rate and stellar metals from the yield
/// difference. Pin that choice so old files keep their meaning.
fn migrate_v1_to_v2(mut config: RunConfig) -> Result<RunConfig, ProjectError> {
    config
        .model
        .infall_model
        .get_or_insert(InfallModelDef::RateTimesSfr);
    config
        .model
        .stellar_metal_model
        .get_or_insert(StellarMetalModelDef::YieldDifference);
    config.version = 2;
    Ok(config)
}
