use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};

use u_staffing::batch::solve_batch;
use u_staffing::io::{read_instance, write_results_file};
use u_staffing::scheduler::{
    SchedulerConfig, StaffingKpi, DEFAULT_MAX_RETRIES, DEFAULT_REQUEUE_POSITION,
};
use u_staffing::telemetry::init_tracing;
use u_staffing::validation::validate_instance;

/// Staff projects from a contributor pool, one output file per input.
#[derive(Debug, Parser)]
#[command(name = "u-staffing", version, about)]
struct Cli {
    /// Instance files to solve.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Seed for candidate choice (input i uses seed + i).
    #[arg(long, env = "U_STAFFING_SEED")]
    seed: Option<u64>,

    /// Requeues allowed per project before it is abandoned.
    #[arg(long, env = "U_STAFFING_MAX_RETRIES", default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: u32,

    /// Backlog index a failed project is reinserted at.
    #[arg(long, default_value_t = DEFAULT_REQUEUE_POSITION)]
    requeue_position: usize,

    /// Directory for result files (defaults to next to each input).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: Level,
}

impl Cli {
    fn config(&self) -> SchedulerConfig {
        SchedulerConfig {
            max_retries: self.max_retries,
            requeue_position: self.requeue_position,
            seed: self.seed,
        }
    }

    fn output_path(&self, input: &Path) -> PathBuf {
        let mut name = input.file_name().unwrap_or_default().to_os_string();
        name.push(".out.txt");
        match &self.output_dir {
            Some(dir) => dir.join(name),
            None => input.with_file_name(name),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs, cli.log_level);

    let requests = cli
        .inputs
        .iter()
        .map(|path| {
            read_instance(path).with_context(|| format!("reading {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    for (path, request) in cli.inputs.iter().zip(&requests) {
        if let Err(errors) = validate_instance(&request.contributors, &request.projects) {
            for error in errors {
                warn!(input = %path.display(), "{error}");
            }
        }
    }

    let outcomes = solve_batch(&requests, &cli.config());

    for ((path, request), outcome) in cli.inputs.iter().zip(&requests).zip(&outcomes) {
        let out = cli.output_path(path);
        write_results_file(&out, &outcome.results)
            .with_context(|| format!("writing {}", out.display()))?;

        let kpi = StaffingKpi::calculate(outcome, &request.projects);
        info!(
            input = %path.display(),
            output = %out.display(),
            completed = kpi.completed,
            abandoned = kpi.abandoned,
            retries = kpi.total_retries,
            nominal_score = kpi.nominal_score,
            "done"
        );
    }

    Ok(())
}
