//! Run execution and caching service.

use std::path::Path;
use std::time::Instant;

use gce_results::{RunManifest, RunStore, TimeseriesRecord, compute_run_id};
use gce_sim::{SimProgress, run_sim_with_progress, step_count};
use tracing::info;

use crate::compile::{CompiledRun, compile_config};
use crate::config_service;
use crate::error::AppResult;

/// Version tag folded into run IDs; bump when numerics change.
pub const SOLVER_VERSION: &str = "euler-0.1.0";

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { use_cache: true }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub config_path: &'a Path,
    pub options: RunOptions,
    /// Replace `integration.dt` from the file
    pub dt: Option<f64>,
    /// Replace `integration.t_end` from the file
    pub t_end: Option<f64>,
}

impl<'a> RunRequest<'a> {
    pub fn new(config_path: &'a Path) -> Self {
        Self {
            config_path,
            options: RunOptions::default(),
            dt: None,
            t_end: None,
        }
    }
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub loaded_from_cache: bool,
    pub elapsed_s: f64,
}

/// Execute a run, or load it from cache if an identical one exists.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    ensure_run_with_progress(request, None)
}

/// Execute or load a run and stream per-step progress.
pub fn ensure_run_with_progress(
    request: &RunRequest,
    progress: Option<&mut dyn FnMut(SimProgress)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();

    let mut config = config_service::load_config(request.config_path)?;
    if let Some(dt) = request.dt {
        config.integration.dt = dt;
    }
    if let Some(t_end) = request.t_end {
        config.integration.t_end = t_end;
    }
    gce_project::validate_config(&config)?;

    let run_id = compute_run_id(&config, SOLVER_VERSION)?;
    let store = RunStore::for_config(request.config_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        let manifest = store.load_manifest(&run_id)?;
        info!(run_id = %run_id, "loaded run from cache");
        return Ok(RunResponse {
            run_id,
            manifest,
            loaded_from_cache: true,
            elapsed_s: started.elapsed().as_secs_f64(),
        });
    }

    let CompiledRun { mut model, options } = compile_config(&config)?;
    let steps = step_count(model.initial.t0, options.t_end, options.dt).min(options.max_steps);
    let record = run_sim_with_progress(&mut model, &options, progress)?;

    let manifest = RunManifest {
        run_id: run_id.clone(),
        config_name: config.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        dt: options.dt,
        t_end: options.t_end,
        steps,
        records: record.len(),
        solver_version: SOLVER_VERSION.to_string(),
    };
    store.save_run(&manifest, &record.x)?;
    info!(run_id = %run_id, steps, records = record.len(), "run stored");

    Ok(RunResponse {
        run_id,
        manifest,
        loaded_from_cache: false,
        elapsed_s: started.elapsed().as_secs_f64(),
    })
}

/// Stored runs for a config, most recent first.
pub fn list_runs(config_path: &Path) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_config(config_path)?;
    let mut runs = store.list_runs()?;
    runs.reverse();
    Ok(runs)
}

/// Load a specific run.
pub fn load_run(
    config_path: &Path,
    run_id: &str,
) -> AppResult<(RunManifest, Vec<TimeseriesRecord>)> {
    let store = RunStore::for_config(config_path)?;

    let manifest = store.load_manifest(run_id)?;
    let records = store.load_timeseries(run_id)?;

    Ok((manifest, records))
}
