//! Command-line arguments

use clap::Parser;
use mcvol_sampler::WorkerConfig;
use std::path::PathBuf;

use crate::config::CliOverrides;
use crate::error::{CliError, Result};

/// Value of `--omp-threads` selecting the machine's logical CPU count.
const DEFAULT_THREADS: &str = "default";

/// mcvol - Monte Carlo volume of the piriform region
#[derive(Parser, Debug)]
#[command(name = "mcvol")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Run on a single worker (takes precedence over --omp-threads)
    #[arg(long)]
    pub no_omp: bool,

    /// Worker count: `default` or a positive integer
    #[arg(long, value_name = "N|default", allow_hyphen_values = true)]
    pub omp_threads: Option<String>,

    /// File whose first line holds the number of samples
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// File the volume estimate is written to
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,

    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Master seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Trials per scheduling chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Resolves the worker configuration.
    ///
    /// `--no-omp` wins over `--omp-threads`; a missing `--omp-threads` means
    /// `default`.
    pub fn worker_config(&self) -> Result<WorkerConfig> {
        if self.no_omp {
            return Ok(WorkerConfig::sequential());
        }
        match self.omp_threads.as_deref() {
            None | Some(DEFAULT_THREADS) => Ok(WorkerConfig::available()),
            Some(raw) => {
                let count: i64 = raw.trim().parse().map_err(|_| CliError::InvalidThreads)?;
                let count = usize::try_from(count).map_err(|_| CliError::InvalidThreads)?;
                WorkerConfig::new(count).map_err(|_| CliError::InvalidThreads)
            }
        }
    }

    /// Worker count reported on the timing line; `0` when `--no-omp` is set.
    pub fn reported_threads(&self, workers: &WorkerConfig) -> usize {
        if self.no_omp {
            0
        } else {
            workers.worker_count()
        }
    }

    /// Configuration values supplied on the command line.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            chunk_size: self.chunk_size,
            seed: self.seed,
            log_level: self.log_level.clone(),
        }
    }
}
