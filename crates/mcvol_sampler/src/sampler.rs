//! Parallel sampler and reducer.
//!
//! [`ParallelSampler`] runs `sample_count` independent trials, each drawing a
//! uniform point from the [`SamplingDomain`] and testing it against a
//! [`Region`], and returns the total number of hits.
//!
//! # Execution model
//!
//! ```text
//! ParallelSampler::run
//! ├── ChunkSchedule     (static round-robin chunks)
//! ├── ThreadPool        (exactly N rayon threads, built per run)
//! │   ├── Worker 0      (own WorkerRng, private hits/trials)
//! │   ├── Worker 1
//! │   └── ...
//! └── fold              (one atomic add per worker)
//! ```
//!
//! Workers never touch shared state inside the trial loop. Each one adds its
//! private totals into the shared counters exactly once, when it finishes.
//! The counters are read only after the pool scope has joined every worker.
//!
//! With a single effective worker the same [`Worker`] code runs on the
//! calling thread and no pool is built.

use mcvol_core::{Piriform, Region, SamplingDomain, VolumeEstimate};
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use super::config::{SamplerConfig, WorkerConfig};
use super::error::SamplerError;
use super::rng::{AxisSampler, WorkerRng};
use super::schedule::ChunkSchedule;

/// Shared cancellation flag.
///
/// Workers poll the flag between chunks, never inside one, so a stop request
/// takes effect after at most one chunk per worker. Totals then cover only
/// the chunks that completed.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Creates an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests every worker to stop at its next chunk boundary.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once [`stop`](Self::stop) has been called.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Hit and trial counts accumulated by one worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialResult {
    /// Worker index.
    pub worker: usize,
    /// Trials classified as inside.
    pub hits: u64,
    /// Trials executed.
    pub trials: u64,
}

/// Outcome of a sampling run.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingReport {
    /// Total trials classified as inside.
    pub hits: u64,
    /// Total trials executed.
    pub trials: u64,
    /// Trials requested.
    pub sample_count: u64,
    /// Workers that ran.
    pub workers: usize,
    /// Trials per chunk.
    pub chunk_size: usize,
    /// Wall-clock time spent sampling.
    pub elapsed: Duration,
    /// True if the run stopped before executing every trial.
    pub cancelled: bool,
}

impl SamplingReport {
    /// Elapsed time in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Volume estimate over the trials that ran.
    ///
    /// Returns `None` if no trial ran.
    pub fn estimate(&self, box_volume: f64) -> Option<VolumeEstimate> {
        (self.trials > 0).then(|| VolumeEstimate::new(self.hits, self.trials, box_volume))
    }
}

/// One sampling worker: owns its generator and counters for the whole run.
struct Worker<'a, T: Float, R> {
    index: usize,
    domain: &'a SamplingDomain<T>,
    region: &'a R,
    schedule: ChunkSchedule,
    seed: Option<u64>,
    stop: Option<&'a StopFlag>,
}

impl<T, R> Worker<'_, T, R>
where
    T: Float + SampleUniform,
    R: Region<T>,
{
    fn run(self) -> PartialResult {
        let mut partial = PartialResult {
            worker: self.index,
            ..PartialResult::default()
        };
        if self.schedule.is_idle(self.index) {
            return partial;
        }

        let mut rng = match self.seed {
            Some(master) => WorkerRng::for_worker(master, self.index),
            None => WorkerRng::from_entropy(),
        };
        let axes = AxisSampler::new(self.domain);

        for chunk in self.schedule.chunks_for(self.index) {
            if self.stop.is_some_and(StopFlag::is_stopped) {
                break;
            }
            let len = chunk.end - chunk.start;
            for _ in 0..len {
                let (x, y, z) = axes.sample(&mut rng);
                if self.region.contains(x, y, z) {
                    partial.hits += 1;
                }
            }
            partial.trials += len;
        }

        partial
    }
}

/// Monte Carlo hit counter over a domain and region.
///
/// # Examples
///
/// ```rust
/// use mcvol_core::{Piriform, SamplingDomain};
/// use mcvol_sampler::{ParallelSampler, SamplerConfig, WorkerConfig};
///
/// let domain = SamplingDomain::<f64>::reference();
/// let region = Piriform::<f64>::reference();
/// let config = SamplerConfig::builder()
///     .workers(WorkerConfig::new(4).unwrap())
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let report = ParallelSampler::new(&domain, &region, config)
///     .run(100_000)
///     .unwrap();
///
/// assert_eq!(report.trials, 100_000);
/// let estimate = report.estimate(domain.volume()).unwrap();
/// assert!((estimate.volume - region.exact_volume()).abs() < 0.05);
/// ```
pub struct ParallelSampler<'a, T: Float, R> {
    domain: &'a SamplingDomain<T>,
    region: &'a R,
    config: SamplerConfig,
    stop: Option<StopFlag>,
}

impl<'a, T, R> ParallelSampler<'a, T, R>
where
    T: Float + SampleUniform + Send + Sync,
    R: Region<T>,
{
    /// Creates a sampler. Nothing runs until [`run`](Self::run).
    pub fn new(domain: &'a SamplingDomain<T>, region: &'a R, config: SamplerConfig) -> Self {
        Self {
            domain,
            region,
            config,
            stop: None,
        }
    }

    /// Attaches a cancellation flag checked at chunk boundaries.
    pub fn with_stop_flag(mut self, stop: StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    fn worker(&self, index: usize, schedule: ChunkSchedule) -> Worker<'_, T, R> {
        Worker {
            index,
            domain: self.domain,
            region: self.region,
            schedule,
            seed: self.config.seed(),
            stop: self.stop.as_ref(),
        }
    }

    /// Runs `sample_count` trials and reduces the per-worker hit counts.
    ///
    /// # Errors
    ///
    /// - [`SamplerError::Config`] if the configuration is invalid
    /// - [`SamplerError::ThreadPool`] if the worker pool cannot be built
    pub fn run(&self, sample_count: u64) -> Result<SamplingReport, SamplerError> {
        self.config.validate()?;

        let workers = self.config.workers().effective_workers();
        let schedule = ChunkSchedule::new(sample_count, self.config.chunk_size(), workers);

        let hits = AtomicU64::new(0);
        let trials = AtomicU64::new(0);
        let fold = |partial: PartialResult| {
            debug!(
                worker = partial.worker,
                hits = partial.hits,
                trials = partial.trials,
                "worker finished"
            );
            hits.fetch_add(partial.hits, Ordering::Relaxed);
            trials.fetch_add(partial.trials, Ordering::Relaxed);
        };

        let start = Instant::now();
        if workers == 1 {
            fold(self.worker(0, schedule).run());
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("mcvol-worker-{i}"))
                .build()?;
            let fold = &fold;
            pool.scope(|scope| {
                for index in 0..workers {
                    let worker = self.worker(index, schedule);
                    scope.spawn(move |_| fold(worker.run()));
                }
            });
        }
        let elapsed = start.elapsed();

        let hits = hits.load(Ordering::Relaxed);
        let trials = trials.load(Ordering::Relaxed);
        let report = SamplingReport {
            hits,
            trials,
            sample_count,
            workers,
            chunk_size: self.config.chunk_size(),
            elapsed,
            cancelled: trials < sample_count,
        };

        debug!(
            hits,
            trials,
            workers,
            seeded = self.config.seed().is_some(),
            elapsed_ms = report.elapsed_ms(),
            "sampling complete"
        );
        Ok(report)
    }
}

/// Counts hits of the reference [`Piriform`] over `domain`.
///
/// Returns `(total_hits, elapsed_ms)`. Workers are entropy-seeded and use the
/// default chunk size.
///
/// # Errors
///
/// Returns [`SamplerError::ThreadPool`] if the worker pool cannot be built.
pub fn run<T>(
    domain: &SamplingDomain<T>,
    sample_count: u64,
    workers: WorkerConfig,
) -> Result<(u64, f64), SamplerError>
where
    T: Float + SampleUniform + Send + Sync,
{
    let region = Piriform::<T>::reference();
    let config = SamplerConfig::builder().workers(workers).build()?;
    let report = ParallelSampler::new(domain, &region, config).run(sample_count)?;
    Ok((report.hits, report.elapsed_ms()))
}
