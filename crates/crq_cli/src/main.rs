//! crq - cyber-risk quantification from the command line
//!
//! Runs FAIR-style Monte Carlo simulations of annualized loss exposure.
//!
//! # Commands
//!
//! - `crq run [--scenario <file>]` - Simulate, print statistics, optionally export CSV
//! - `crq check --scenario <file>` - Validate a scenario file without running it
//!
//! # Configuration
//!
//! Values are resolved from CLI flags, then `CRQ_*` environment variables,
//! then the scenario TOML file, then built-in defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{resolve_log_level, EnvOverrides, ScenarioFile};

/// Cyber-risk Monte Carlo simulator
#[derive(Parser)]
#[command(name = "crq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run(commands::run::RunArgs),

    /// Validate a scenario file
    Check {
        /// Scenario TOML file
        #[arg(short, long)]
        scenario: PathBuf,
    },
}

impl Commands {
    fn scenario_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Run(args) => args.scenario.as_ref(),
            Commands::Check { scenario } => Some(scenario),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scenario = cli
        .command
        .scenario_path()
        .map(|path| ScenarioFile::from_file(path))
        .transpose()?;
    let env = EnvOverrides::from_env()?;
    let level = resolve_log_level(cli.log_level.as_deref(), cli.verbose, &env, scenario.as_ref())?;

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str())))
        .init();
    debug!(%level, "Logging initialised");

    match &cli.command {
        Commands::Run(args) => commands::run::run(args, scenario.as_ref(), &env),
        Commands::Check { .. } => match &scenario {
            Some(scenario) => commands::check::run(scenario, &env),
            None => Err(CliError::InvalidArgument("--scenario is required".to_string())),
        },
    }
}
