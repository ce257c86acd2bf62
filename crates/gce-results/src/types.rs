//! Result data types.

use gce_model::GalaxyState;
use serde::{Deserialize, Serialize};

pub type RunId = String;

/// One recorded point of the time series.
pub type TimeseriesRecord = GalaxyState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub config_name: String,
    pub timestamp: String,
    pub dt: f64,
    pub t_end: f64,
    pub steps: usize,
    pub records: usize,
    pub solver_version: String,
}
