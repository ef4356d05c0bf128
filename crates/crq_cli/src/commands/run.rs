//! Run command implementation
//!
//! Runs a simulation, prints the result and optionally writes the sample
//! and summary CSV exports.

use std::path::PathBuf;

use clap::Args;
use crq_engine::ParallelConfig;
use crq_risk::{run_simulation, run_simulation_parallel};
use tracing::info;

use crate::config::{build_config, CliOverrides, EnvOverrides, ScenarioFile};
use crate::output::{self, OutputFormat};
use crate::{CliError, Result};

/// Arguments of `crq run`.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Scenario TOML file (defaults to the built-in scenario)
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// Number of simulated years
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// VaR confidence level in percent
    #[arg(short, long)]
    pub confidence: Option<f64>,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use chunk-parallel sampling
    #[arg(short, long)]
    pub parallel: bool,

    /// Samples per chunk for parallel runs
    #[arg(long, requires = "parallel")]
    pub chunk_size: Option<usize>,

    /// Console output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write per-sample CSV to this file
    #[arg(short, long, conflicts_with = "export_default")]
    pub export: Option<PathBuf>,

    /// Write per-sample CSV to crq_simulation_<timestamp>.csv
    #[arg(long)]
    pub export_default: bool,

    /// Write the key-value summary CSV to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

impl RunArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            iterations: self.iterations,
            confidence: self.confidence,
            seed: self.seed,
        }
    }

    fn parallel_config(&self) -> Result<Option<ParallelConfig>> {
        if !self.parallel {
            return Ok(None);
        }
        let defaults = ParallelConfig::default();
        let chunk_size = match self.chunk_size {
            Some(0) => {
                return Err(CliError::InvalidArgument(
                    "--chunk-size must be at least 1".to_string(),
                ))
            }
            Some(size) => size,
            None => defaults.chunk_size,
        };
        Ok(Some(ParallelConfig::new(chunk_size, defaults.parallel_threshold)))
    }
}

/// Run the simulation command
pub fn run(args: &RunArgs, scenario: Option<&ScenarioFile>, env: &EnvOverrides) -> Result<()> {
    let config = build_config(scenario, env, &args.overrides())?;
    info!(
        iterations = config.iterations(),
        confidence = config.confidence(),
        seed = config.seed(),
        parallel = args.parallel,
        "Running simulation"
    );

    let result = match args.parallel_config()? {
        Some(parallel) => run_simulation_parallel(&config, &parallel)?,
        None => run_simulation(&config)?,
    };

    output::print_result(&config, &result, args.format)?;

    let export = if args.export_default {
        Some(output::default_export_path(&chrono::Local::now()))
    } else {
        args.export.clone()
    };
    if let Some(path) = export {
        output::write_samples_csv(&path, &result)?;
        info!(path = %path.display(), rows = result.samples().len(), "Sample export written");
    }
    if let Some(path) = &args.summary {
        output::write_summary_csv(path, &result.summary_record())?;
        info!(path = %path.display(), "Summary export written");
    }

    Ok(())
}
