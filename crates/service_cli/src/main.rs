//! circle-mc - Monte Carlo Area of Circle Intersections
//!
//! Command-line entry point for the circle intersection experiments.
//!
//! # Commands
//!
//! - `circle-mc sweep` - Convergence sweep over box choices and sample counts
//! - `circle-mc single` - Estimate the common area of three circles read from stdin
//!
//! Results go to stdout; logs go to stderr so the output stays machine-readable.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::sweep::OutputFormat;
use config::CliConfig;

/// Monte Carlo area estimation for circle intersections
#[derive(Parser)]
#[command(name = "circle-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the random stream (default: drawn from OS entropy)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep sample counts and bounding boxes, averaging repeated runs
    Sweep {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Override the number of runs averaged per row
        #[arg(short, long)]
        runs: Option<usize>,
    },

    /// Read `x y r` for three circles from stdin and print the estimated area
    Single {
        /// Number of samples
        #[arg(short = 'n', long)]
        samples: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load_or_default(cli.config.as_deref())?.with_env_override();
    config.validate()?;

    let mut estimator = commands::estimator_for(cli.seed.or(config.seed));

    match cli.command {
        Commands::Sweep { format, runs } => {
            let mut config = config;
            if let Some(runs) = runs {
                config.sweep.runs_per_config = runs;
            }
            let stdout = io::stdout();
            commands::sweep::run(
                config.sweep_config()?,
                &mut estimator,
                format,
                io::BufWriter::new(stdout.lock()),
            )?;
        }
        Commands::Single { samples } => {
            let samples = samples.unwrap_or(config.single.samples);
            if samples == 0 {
                return Err(CliError::InvalidArgument(
                    "--samples must be greater than 0".to_string(),
                ));
            }
            commands::single::run(
                io::stdin().lock(),
                io::stdout().lock(),
                &mut estimator,
                samples,
            )?;
        }
    }

    Ok(())
}
