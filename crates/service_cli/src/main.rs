//! mcvol CLI - Monte Carlo volume of the piriform region
//!
//! Reads a sample count from `--input`, estimates the volume of
//! `4(y^2 + z^2) - 2x^3 + x^4 <= 0` inside `[0, 2] x [-0.65, 0.65]^2` with a
//! pool of parallel samplers, writes the estimate to `--output` and prints
//! the sampling time.
//!
//! # Usage
//!
//! ```text
//! mcvol --input n.txt --output v.txt
//! mcvol --omp-threads 8 --input n.txt --output v.txt
//! mcvol --no-omp --input n.txt --output v.txt --seed 42
//! ```
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate turns command-line input into
//! a mcvol_sampler run over the mcvol_core reference shape.

use clap::Parser;
use mcvol_core::{Piriform, SamplingDomain};
use mcvol_sampler::{ParallelSampler, SamplerConfig};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod io;

use cli::Args;
use config::{build_config, LogLevel};
use error::{CliError, Result};

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<()> {
    let first_line = io::read_first_line(&args.input)?;
    let workers = args.worker_config()?;
    let config = build_config(&args.overrides())?;

    init_tracing(config.log_level);

    let sample_count = io::parse_sample_count(&first_line)?;
    info!(
        sample_count,
        workers = workers.effective_workers(),
        chunk_size = config.chunk_size,
        seed = ?config.seed,
        "Run configuration loaded"
    );

    let sampler_config = SamplerConfig::builder()
        .workers(workers)
        .chunk_size(config.chunk_size)
        .maybe_seed(config.seed)
        .build()
        .map_err(mcvol_sampler::SamplerError::from)?;

    let domain = SamplingDomain::<f64>::reference();
    let region = Piriform::<f64>::reference();
    let report = ParallelSampler::new(&domain, &region, sampler_config).run(sample_count)?;

    let estimate = report
        .estimate(domain.volume())
        .ok_or(CliError::InvalidIterations)?;
    io::write_estimate(&args.output, estimate.volume)?;

    info!(
        volume = estimate.volume,
        hits = estimate.hits,
        relative_error = estimate.relative_error(region.exact_volume()),
        "Estimate written"
    );

    println!(
        "Time ({} thread(s)): {:.3} ms",
        args.reported_threads(&workers),
        report.elapsed_ms()
    );
    Ok(())
}

fn fail(err: CliError) -> ExitCode {
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match CliError::from_clap(&err) {
            Some(mapped) => return fail(mapped),
            None => err.exit(),
        },
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(err),
    }
}
