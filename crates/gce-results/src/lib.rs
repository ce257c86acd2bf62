//! gce-results: run cache and timeseries storage.

pub mod csv;
pub mod hash;
pub mod store;
pub mod types;

pub use csv::{field_series, series_csv, to_csv};
pub use hash::compute_run_id;
pub use store::RunStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    #[error("Corrupt timeseries: {message}")]
    Corrupt { message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
