//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered during a transient run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite {what} at t={t}: {value}")]
    NonFinite {
        what: &'static str,
        t: f64,
        value: f64,
    },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<gce_core::GceError> for SimError {
    fn from(e: gce_core::GceError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
