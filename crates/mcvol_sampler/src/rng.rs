//! Per-worker random number generation.
//!
//! Every sampling worker owns exactly one [`WorkerRng`], created when the
//! worker starts and dropped when it finishes. Generators are never shared
//! between workers and there is no thread-local state, so the hot loop never
//! contends on generator state.
//!
//! ## Seeding
//!
//! - [`WorkerRng::from_entropy`] seeds from the operating system. This is the
//!   default; independence across workers then rests on seed collisions being
//!   vanishingly unlikely rather than on disjoint streams by construction.
//! - [`WorkerRng::for_worker`] derives a distinct seed per worker from a
//!   master seed, which makes whole runs reproducible for a fixed worker count
//!   and chunk size.

use mcvol_core::SamplingDomain;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Weyl increment used to spread worker indices over the seed space.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finaliser. A bijection on `u64`.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derives the seed for `worker_index` from a master seed.
///
/// Distinct worker indices always map to distinct seeds.
#[inline]
pub fn worker_seed(master_seed: u64, worker_index: usize) -> u64 {
    let index = (worker_index as u64).wrapping_add(1);
    splitmix64(master_seed.wrapping_add(index.wrapping_mul(GOLDEN_GAMMA)))
}

/// Random number generator owned by a single sampling worker.
///
/// # Examples
///
/// ```rust
/// use mcvol_sampler::rng::WorkerRng;
///
/// let mut a = WorkerRng::for_worker(42, 0);
/// let mut b = WorkerRng::for_worker(42, 0);
/// assert_eq!(a.seed(), b.seed());
/// assert_eq!(a.next_u64(), b.next_u64());
///
/// let c = WorkerRng::for_worker(42, 1);
/// assert_ne!(a.seed(), c.seed());
/// ```
#[derive(Debug)]
pub struct WorkerRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl WorkerRng {
    /// Creates a generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a generator from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates the generator for `worker_index`, reproducibly derived from
    /// `master_seed`.
    pub fn for_worker(master_seed: u64, worker_index: usize) -> Self {
        Self::from_seed(worker_seed(master_seed, worker_index))
    }

    /// Returns the seed, or `None` for entropy-seeded generators.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws a raw 64-bit value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        rand::RngCore::next_u64(&mut self.inner)
    }

    /// Draws from a distribution.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.inner)
    }
}

/// Uniform point sampler over a [`SamplingDomain`].
///
/// Holds one uniform distribution per axis. Each axis interval is closed, so a
/// degenerate axis (`min == max`) always yields `min`.
///
/// # Examples
///
/// ```rust
/// use mcvol_core::SamplingDomain;
/// use mcvol_sampler::rng::{AxisSampler, WorkerRng};
///
/// let domain = SamplingDomain::<f64>::reference();
/// let sampler = AxisSampler::new(&domain);
/// let mut rng = WorkerRng::from_seed(7);
///
/// let (x, y, z) = sampler.sample(&mut rng);
/// assert!(domain.contains_point(x, y, z));
/// ```
pub struct AxisSampler<T: SampleUniform> {
    x: Uniform<T>,
    y: Uniform<T>,
    z: Uniform<T>,
}

impl<T> AxisSampler<T>
where
    T: Float + SampleUniform,
{
    /// Builds per-axis distributions from the domain bounds.
    pub fn new(domain: &SamplingDomain<T>) -> Self {
        let (x0, x1) = domain.x_range();
        let (y0, y1) = domain.y_range();
        let (z0, z1) = domain.z_range();
        Self {
            x: Uniform::new_inclusive(x0, x1),
            y: Uniform::new_inclusive(y0, y1),
            z: Uniform::new_inclusive(z0, z1),
        }
    }

    /// Draws one point: x, then y, then z.
    #[inline]
    pub fn sample(&self, rng: &mut WorkerRng) -> (T, T, T) {
        let x = rng.sample(&self.x);
        let y = rng.sample(&self.y);
        let z = rng.sample(&self.z);
        (x, y, z)
    }
}
