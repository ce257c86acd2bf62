//! Fixed-step time integration for the one-zone chemical evolution model.
//!
//! Provides:
//! - `TransientModel` trait splitting a step into increments and their application
//! - Forward Euler integrator
//! - `OneBoxModel`, the reference driver that sequences the update rules
//! - Run loop with decimated recording and progress callbacks

pub mod error;
pub mod integrator;
pub mod model;
pub mod one_box;
pub mod sim;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::ForwardEuler;
pub use model::TransientModel;
pub use one_box::{EulerStep, OneBoxModel, StepPolicy};
pub use sim::{SimOptions, SimProgress, SimRecord, run_sim, run_sim_with_progress, step_count};
