//! # mcvol Sampler (Layer 2: Parallel Engine)
//!
//! ## Layer 2 Role
//!
//! mcvol_sampler runs the Monte Carlo trials on top of mcvol_core:
//! - [`SamplerConfig`]: worker count, chunk size and optional master seed
//! - [`ChunkSchedule`]: static round-robin assignment of trial chunks
//! - [`rng`]: per-worker generators and uniform point sampling
//! - [`ParallelSampler`]: fixed-size worker pool with a single per-worker
//!   atomic reduction
//!
//! ## Determinism
//!
//! Without a seed every worker draws from operating-system entropy and runs
//! are not reproducible. With a seed, a run is reproducible for a fixed
//! worker count and chunk size. A single seeded worker produces the same hit
//! count for every chunk size.
//!
//! ## Usage Example
//!
//! ```rust
//! use mcvol_core::SamplingDomain;
//! use mcvol_sampler::{run, WorkerConfig};
//!
//! let domain = SamplingDomain::<f64>::reference();
//! let (hits, elapsed_ms) = run(&domain, 10_000, WorkerConfig::new(2).unwrap()).unwrap();
//!
//! assert!(hits <= 10_000);
//! assert!(elapsed_ms >= 0.0);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod rng;
pub mod sampler;
pub mod schedule;

pub use config::{SamplerConfig, SamplerConfigBuilder, WorkerConfig, DEFAULT_CHUNK_SIZE};
pub use error::{ConfigError, SamplerError};
pub use sampler::{run, ParallelSampler, PartialResult, SamplingReport, StopFlag};
pub use schedule::ChunkSchedule;
