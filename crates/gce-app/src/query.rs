//! Query helpers for loaded runs.

use gce_results::TimeseriesRecord;

use crate::error::{AppError, AppResult};

/// Time range and end state of a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub time_range: (f64, f64),
    pub record_count: usize,
    pub final_m_gas: f64,
    pub final_m_star: f64,
    pub final_z_gas: f64,
}

pub fn get_run_summary(records: &[TimeseriesRecord]) -> AppResult<RunSummary> {
    let (first, last) = match (records.first(), records.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(AppError::InvalidInput("No records in run".to_string())),
    };

    Ok(RunSummary {
        time_range: (first.t, last.t),
        record_count: records.len(),
        final_m_gas: last.m_gas,
        final_m_star: last.m_star,
        final_z_gas: last.z_gas,
    })
}

/// `(t, value)` series for a state field such as `m_gas` or `z_star`.
pub fn extract_series(records: &[TimeseriesRecord], field: &str) -> AppResult<Vec<(f64, f64)>> {
    Ok(gce_results::field_series(records, field)?)
}
