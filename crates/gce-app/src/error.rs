//! Error types for the gce-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gce-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<gce_project::ValidationError> for AppError {
    fn from(err: gce_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<gce_sim::SimError> for AppError {
    fn from(err: gce_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<gce_results::ResultsError> for AppError {
    fn from(err: gce_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
