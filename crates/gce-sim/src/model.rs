//! TransientModel trait for pluggable dynamic systems.

use crate::error::SimResult;

/// Trait for models advanced by explicit, fixed-size steps.
///
/// A step is split in two so integrators stay generic:
/// - `increments` evaluates every per-process change from the current state
/// - `apply` folds those changes into a new state
pub trait TransientModel {
    /// State type (must be Clone, for snapshots).
    type State: Clone;

    /// Per-step changes produced by `increments`.
    type Increments;

    /// Return the initial state.
    fn initial_state(&self) -> Self::State;

    /// Time at which `initial_state` applies.
    fn initial_time(&self) -> f64 {
        0.0
    }

    /// Evaluate the changes over a step of length `dt` starting at `(t, x)`.
    ///
    /// Takes &mut self so models can keep diagnostics across steps.
    fn increments(&mut self, t: f64, x: &Self::State, dt: f64) -> SimResult<Self::Increments>;

    /// Apply increments to `x`, returning the state at `t + dt`.
    fn apply(
        &mut self,
        t: f64,
        x: &Self::State,
        inc: &Self::Increments,
        dt: f64,
    ) -> SimResult<Self::State>;
}
