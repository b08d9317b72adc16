//! Static chunk schedule.
//!
//! Trials are numbered `0..sample_count` and grouped into fixed-size
//! contiguous chunks. Chunk `c` covers
//! `[c * chunk_size, min((c + 1) * chunk_size, sample_count))` and is owned by
//! worker `c % workers` (round-robin). The last chunk may be short.
//!
//! The chunk size is a tunable constant: it depends on neither the sample
//! count nor the worker count. When there are fewer chunks than workers the
//! surplus workers own nothing and stay idle; totals are unaffected.
//!
//! ```text
//! workers = 3, chunk_size = 4, sample_count = 18
//!
//! trials   0..4  4..8  8..12  12..16  16..18
//! chunk    0     1     2      3       4
//! worker   0     1     2      0       1
//! ```

use std::ops::Range;

/// Round-robin assignment of fixed-size trial chunks to workers.
///
/// # Examples
///
/// ```rust
/// use mcvol_sampler::ChunkSchedule;
///
/// let schedule = ChunkSchedule::new(18, 4, 3);
/// assert_eq!(schedule.chunk_count(), 5);
/// assert_eq!(schedule.chunk(4), 16..18);
///
/// let owned: Vec<_> = schedule.chunks_for(1).collect();
/// assert_eq!(owned, vec![4..8, 16..18]);
/// assert_eq!(schedule.trials_for(1), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkSchedule {
    sample_count: u64,
    chunk_size: u64,
    workers: u64,
}

impl ChunkSchedule {
    /// Creates a schedule.
    ///
    /// `chunk_size` and `workers` are clamped to at least 1; callers pass
    /// values already validated by [`SamplerConfig`](crate::SamplerConfig).
    pub fn new(sample_count: u64, chunk_size: usize, workers: usize) -> Self {
        Self {
            sample_count,
            chunk_size: chunk_size.max(1) as u64,
            workers: workers.max(1) as u64,
        }
    }

    /// Total number of trials.
    #[inline]
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Trials per (full) chunk.
    #[inline]
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Number of workers the chunks are spread over.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers as usize
    }

    /// Number of chunks, including a trailing short chunk.
    #[inline]
    pub fn chunk_count(&self) -> u64 {
        self.sample_count.div_ceil(self.chunk_size)
    }

    /// Trial index range of chunk `c`.
    ///
    /// Returns an empty range for `c >= chunk_count()`.
    pub fn chunk(&self, c: u64) -> Range<u64> {
        let start = c.saturating_mul(self.chunk_size).min(self.sample_count);
        let end = start.saturating_add(self.chunk_size).min(self.sample_count);
        start..end
    }

    /// Worker that owns chunk `c`.
    #[inline]
    pub fn owner(&self, c: u64) -> usize {
        (c % self.workers) as usize
    }

    /// Chunks owned by `worker`, in increasing trial order.
    pub fn chunks_for(&self, worker: usize) -> impl Iterator<Item = Range<u64>> + '_ {
        let first = worker as u64;
        let step = self.workers as usize;
        (first..self.chunk_count())
            .step_by(step)
            .map(move |c| self.chunk(c))
    }

    /// Number of trials owned by `worker`.
    pub fn trials_for(&self, worker: usize) -> u64 {
        let w = worker as u64;
        let full_chunks = self.sample_count / self.chunk_size;
        let remainder = self.sample_count % self.chunk_size;

        let owned_full = if full_chunks > w {
            (full_chunks - w - 1) / self.workers + 1
        } else {
            0
        };
        let tail = if remainder > 0 && full_chunks % self.workers == w {
            remainder
        } else {
            0
        };
        owned_full * self.chunk_size + tail
    }

    /// Returns true if `worker` owns no chunk.
    #[inline]
    pub fn is_idle(&self, worker: usize) -> bool {
        worker as u64 >= self.chunk_count()
    }
}
