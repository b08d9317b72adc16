//! Sampler configuration.
//!
//! This module provides the worker configuration and the builder for
//! [`SamplerConfig`]. Both are constructed once before sampling starts and
//! are immutable afterwards.

use super::error::ConfigError;

/// Default number of consecutive trials per chunk.
///
/// Large enough to amortise scheduling and small enough to keep per-worker
/// trial counts balanced for modest sample counts.
pub const DEFAULT_CHUNK_SIZE: usize = 350;

/// Number of parallel workers and whether parallel execution is disabled.
///
/// # Examples
///
/// ```rust
/// use mcvol_sampler::WorkerConfig;
///
/// let workers = WorkerConfig::new(8).unwrap();
/// assert_eq!(workers.effective_workers(), 8);
///
/// let sequential = workers.with_parallel_disabled();
/// assert_eq!(sequential.effective_workers(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerConfig {
    worker_count: usize,
    disable_parallel: bool,
}

impl WorkerConfig {
    /// Creates a configuration with `worker_count` parallel workers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkerCount`] if `worker_count` is 0.
    pub fn new(worker_count: usize) -> Result<Self, ConfigError> {
        if worker_count == 0 {
            return Err(ConfigError::InvalidWorkerCount(worker_count));
        }
        Ok(Self {
            worker_count,
            disable_parallel: false,
        })
    }

    /// Single worker on the calling thread.
    pub fn sequential() -> Self {
        Self {
            worker_count: 1,
            disable_parallel: true,
        }
    }

    /// One worker per available CPU.
    pub fn available() -> Self {
        Self {
            worker_count: num_cpus::get().max(1),
            disable_parallel: false,
        }
    }

    /// Returns a copy with parallel execution disabled.
    pub fn with_parallel_disabled(mut self) -> Self {
        self.disable_parallel = true;
        self
    }

    /// Requested worker count, ignoring the disable flag.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Returns true if parallel execution is disabled.
    #[inline]
    pub fn is_parallel_disabled(&self) -> bool {
        self.disable_parallel
    }

    /// Number of workers that will actually run.
    #[inline]
    pub fn effective_workers(&self) -> usize {
        if self.disable_parallel {
            1
        } else {
            self.worker_count
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self::sequential()
    }
}

/// Sampling engine configuration.
///
/// Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use mcvol_sampler::{SamplerConfig, WorkerConfig};
///
/// let config = SamplerConfig::builder()
///     .workers(WorkerConfig::new(4).unwrap())
///     .chunk_size(1_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.chunk_size(), 1_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    workers: WorkerConfig,
    chunk_size: usize,
    seed: Option<u64>,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the worker configuration.
    #[inline]
    pub fn workers(&self) -> WorkerConfig {
        self.workers
    }

    /// Returns the number of trials per chunk.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the master seed, if sampling is reproducible.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the chunk size or worker count is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if self.workers.worker_count == 0 {
            return Err(ConfigError::InvalidWorkerCount(self.workers.worker_count));
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            workers: WorkerConfig::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            seed: None,
        }
    }
}

/// Builder for [`SamplerConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    workers: Option<WorkerConfig>,
    chunk_size: Option<usize>,
    seed: Option<u64>,
}

impl SamplerConfigBuilder {
    /// Sets the worker configuration (default: sequential).
    #[inline]
    pub fn workers(mut self, workers: WorkerConfig) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the number of trials per chunk (default: [`DEFAULT_CHUNK_SIZE`]).
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Seeds every worker deterministically from `seed`.
    ///
    /// Without a seed, each worker draws its seed from OS entropy.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the chunk size is 0.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let config = SamplerConfig {
            workers: self.workers.unwrap_or_default(),
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
