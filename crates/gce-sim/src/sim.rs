//! Simulation runner and result recording.

use crate::error::{SimError, SimResult};
use crate::integrator::ForwardEuler;
use crate::model::TransientModel;
use tracing::{debug, info};

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step
    pub dt: f64,
    /// Final simulation time (absolute, same clock as the model's initial time)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            t_end: 1.0,
            max_steps: 100_000,
            record_every: 10,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "dt must be positive and finite",
            });
        }
        if !self.t_end.is_finite() {
            return Err(SimError::InvalidArg {
                what: "t_end must be finite",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        Ok(())
    }
}

/// Record of simulation results.
#[derive(Clone, Debug)]
pub struct SimRecord<S> {
    /// Time points
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<S>,
}

impl<S> SimRecord<S> {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn last(&self) -> Option<&S> {
        self.x.last()
    }
}

/// Progress snapshot passed to callbacks after every step.
#[derive(Clone, Copy, Debug)]
pub struct SimProgress {
    pub step: usize,
    pub total_steps: usize,
    pub t: f64,
}

/// Number of fixed steps needed to go from `t0` to `t_end`.
///
/// A final partial interval counts as a whole step; the small slack stops
/// `t_end / dt` landing a hair above an integer from adding a spurious step.
pub fn step_count(t0: f64, t_end: f64, dt: f64) -> usize {
    let n = ((t_end - t0) / dt - 1e-9).ceil();
    if n > 0.0 { n as usize } else { 0 }
}

/// Run a fixed-step forward Euler simulation.
pub fn run_sim<M: TransientModel>(
    model: &mut M,
    opts: &SimOptions,
) -> SimResult<SimRecord<M::State>> {
    run_sim_with_progress(model, opts, None)
}

/// Run a simulation, reporting progress after every step.
pub fn run_sim_with_progress<M: TransientModel>(
    model: &mut M,
    opts: &SimOptions,
    mut progress: Option<&mut dyn FnMut(SimProgress)>,
) -> SimResult<SimRecord<M::State>> {
    opts.validate()?;

    let mut t = model.initial_time();
    let mut x = model.initial_state();
    let total_steps = step_count(t, opts.t_end, opts.dt).min(opts.max_steps);

    info!(
        t0 = t,
        t_end = opts.t_end,
        dt = opts.dt,
        steps = total_steps,
        "starting transient run"
    );

    let mut t_record = vec![t];
    let mut x_record = vec![x.clone()];

    let integrator = ForwardEuler;
    let mut step = 0;
    while step < total_steps {
        x = integrator.step(model, t, &x, opts.dt)?;
        t += opts.dt;
        step += 1;
        debug!(step, t, "step complete");

        if step % opts.record_every == 0 {
            t_record.push(t);
            x_record.push(x.clone());
        }

        if let Some(cb) = progress.as_deref_mut() {
            cb(SimProgress {
                step,
                total_steps,
                t,
            });
        }
    }

    // Always record final state
    if step % opts.record_every != 0 {
        t_record.push(t);
        x_record.push(x);
    }

    info!(steps = step, t_final = t, "transient run finished");

    Ok(SimRecord {
        t: t_record,
        x: x_record,
    })
}
