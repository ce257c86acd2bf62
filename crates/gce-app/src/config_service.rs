//! Config loading and validation.

use gce_project::RunConfig;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Load, migrate and validate a YAML or JSON config.
pub fn load_config(path: &Path) -> AppResult<RunConfig> {
    gce_project::load(path).map_err(|e| AppError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config and return it only if it validates.
pub fn validate_file(path: &Path) -> AppResult<RunConfig> {
    let config = load_config(path)?;
    gce_project::validate_config(&config)?;
    Ok(config)
}
