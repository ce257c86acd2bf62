//! gce-core: shared foundation for the galactic chemical evolution crates.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GceError, GceResult};
pub use numeric::*;
