//! Fixed-step time integrators.

use crate::error::SimResult;
use crate::model::TransientModel;

/// Forward Euler (explicit, 1st order).
///
/// Increments are evaluated once, at the start of the step.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl ForwardEuler {
    /// Advance state by one time step.
    pub fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let inc = model.increments(t, x, dt)?;
        model.apply(t, x, &inc, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dx/dt = -k x, stored as a plain float.
    struct Decay {
        k: f64,
    }

    impl TransientModel for Decay {
        type State = f64;
        type Increments = f64;

        fn initial_state(&self) -> f64 {
            1.0
        }

        fn increments(&mut self, _t: f64, x: &f64, dt: f64) -> SimResult<f64> {
            Ok(-self.k * x * dt)
        }

        fn apply(&mut self, _t: f64, x: &f64, inc: &f64, _dt: f64) -> SimResult<f64> {
            Ok(x + inc)
        }
    }

    #[test]
    fn euler_step_matches_hand_value() {
        let mut model = Decay { k: 2.0 };
        let x1 = ForwardEuler.step(&mut model, 0.0, &1.0, 0.25).unwrap();
        assert_eq!(x1, 0.5);
    }

    #[test]
    fn repeated_steps_are_geometric() {
        let mut model = Decay { k: 1.0 };
        let mut x = model.initial_state();
        for _ in 0..4 {
            x = ForwardEuler.step(&mut model, 0.0, &x, 0.5).unwrap();
        }
        assert_eq!(x, 0.5_f64.powi(4));
    }
}
