//! Shared application service layer.
//!
//! Centralizes config loading, model compilation, run execution with
//! caching, and result querying for the CLI.

pub mod compile;
pub mod config_service;
pub mod error;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use compile::{CompiledRun, compile_config};
pub use config_service::{load_config, validate_file};
pub use error::{AppError, AppResult};
pub use query::{RunSummary, extract_series, get_run_summary};
pub use run_service::{
    RunOptions, RunRequest, RunResponse, SOLVER_VERSION, ensure_run, ensure_run_with_progress,
    list_runs, load_run,
};
