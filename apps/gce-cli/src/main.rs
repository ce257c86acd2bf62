use clap::{Parser, Subcommand};
use gce_app::{AppResult, RunOptions, RunRequest, query, run_service};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gce-cli")]
#[command(about = "One-zone galactic chemical evolution runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run config
    Validate {
        /// Path to the YAML or JSON config
        config_path: PathBuf,
    },
    /// Run a simulation
    Run {
        /// Path to the YAML or JSON config
        config_path: PathBuf,
        /// Override the time step from the config
        #[arg(long)]
        dt: Option<f64>,
        /// Override the end time from the config
        #[arg(long)]
        t_end: Option<f64>,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs for a config
    Runs {
        /// Path to the YAML or JSON config
        config_path: PathBuf,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the YAML or JSON config
        config_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export a run as CSV
    Export {
        /// Path to the YAML or JSON config
        config_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Export a single state field (e.g. m_gas, z_gas) instead of the full table
        #[arg(long)]
        field: Option<String>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Run {
            config_path,
            dt,
            t_end,
            no_cache,
        } => cmd_run(&config_path, dt, t_end, !no_cache),
        Commands::Runs { config_path } => cmd_runs(&config_path),
        Commands::ShowRun {
            config_path,
            run_id,
        } => cmd_show_run(&config_path, &run_id),
        Commands::Export {
            config_path,
            run_id,
            field,
            output,
        } => cmd_export(&config_path, &run_id, field.as_deref(), output.as_deref()),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = gce_app::validate_file(config_path)?;
    println!("✓ Config '{}' is valid (version {})", config.name, config.version);
    Ok(())
}

fn cmd_run(
    config_path: &Path,
    dt: Option<f64>,
    t_end: Option<f64>,
    use_cache: bool,
) -> AppResult<()> {
    println!("Running simulation: {}", config_path.display());

    let request = RunRequest {
        config_path,
        options: RunOptions { use_cache },
        dt,
        t_end,
    };

    let mut last_emit = Instant::now();
    let response = run_service::ensure_run_with_progress(
        &request,
        Some(&mut |p| {
            if last_emit.elapsed().as_millis() >= 100 || p.step == p.total_steps {
                render_progress(p.step, p.total_steps, p.t);
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Simulation completed: {}", response.run_id);
    }
    println!(
        "  dt = {}, t_end = {}, steps = {}, elapsed = {:.3}s",
        response.manifest.dt, response.manifest.t_end, response.manifest.steps, response.elapsed_s
    );

    let (_manifest, records) = run_service::load_run(config_path, &response.run_id)?;
    print_summary(&query::get_run_summary(&records)?);

    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}

fn render_progress(step: usize, total: usize, t: f64) {
    let width = 28usize;
    let fraction = if total == 0 {
        1.0
    } else {
        step as f64 / total as f64
    };
    let filled = ((fraction * width as f64).round() as usize).min(width);
    print!(
        "\r[{}{}] {:>6.2}%  t={:.4}  step={}/{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled)),
        fraction * 100.0,
        t,
        step,
        total
    );
    let _ = io::stdout().flush();
}

fn print_summary(summary: &query::RunSummary) {
    println!("  Time points: {}", summary.record_count);
    println!(
        "  Time range: {} - {}",
        summary.time_range.0, summary.time_range.1
    );
    println!("  Final gas mass:     {:.6e}", summary.final_m_gas);
    println!("  Final stellar mass: {:.6e}", summary.final_m_star);
    println!("  Final gas Z:        {:.6e}", summary.final_z_gas);
}

fn cmd_runs(config_path: &Path) -> AppResult<()> {
    let runs = run_service::list_runs(config_path)?;

    if runs.is_empty() {
        println!("No cached runs found for: {}", config_path.display());
    } else {
        println!("Cached runs for '{}':", config_path.display());
        for manifest in runs {
            println!(
                "  {} ({}, dt={}, t_end={})",
                manifest.run_id, manifest.timestamp, manifest.dt, manifest.t_end
            );
        }
    }
    Ok(())
}

fn cmd_show_run(config_path: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, records) = run_service::load_run(config_path, run_id)?;

    println!("\nRun Summary:");
    println!("  Config: {}", manifest.config_name);
    println!("  Created: {}", manifest.timestamp);
    println!("  Solver: {}", manifest.solver_version);
    println!("  Steps: {}", manifest.steps);
    print_summary(&query::get_run_summary(&records)?);

    Ok(())
}

fn cmd_export(
    config_path: &Path,
    run_id: &str,
    field: Option<&str>,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, records) = run_service::load_run(config_path, run_id)?;

    let (csv, rows) = match field {
        Some(name) => {
            let series = query::extract_series(&records, name)?;
            (gce_results::series_csv(name, &series), series.len())
        }
        None => (gce_results::to_csv(&records), records.len()),
    };

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} rows to {}", rows, path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}
