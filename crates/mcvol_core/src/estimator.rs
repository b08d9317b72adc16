//! Volume estimator.
//!
//! Converts a total hit count into a volume:
//!
//! ```text
//! volume = (hits / samples) * box_volume
//! ```
//!
//! The estimator is a pure function with no state. Callers guarantee
//! `samples > 0`; the sample count is validated before sampling starts.

/// Fraction of samples classified as inside.
///
/// # Examples
///
/// ```rust
/// use mcvol_core::hit_ratio;
///
/// assert_eq!(hit_ratio(1, 4), 0.25);
/// ```
#[inline]
pub fn hit_ratio(total_hits: u64, sample_count: u64) -> f64 {
    debug_assert!(sample_count > 0, "sample count must be positive");
    total_hits as f64 / sample_count as f64
}

/// Scales the hit ratio by the bounding-box volume.
///
/// # Examples
///
/// ```rust
/// use mcvol_core::estimate_volume;
///
/// let v = estimate_volume(500, 1000, 3.38);
/// assert!((v - 1.69).abs() < 1e-12);
/// ```
#[inline]
pub fn estimate_volume(total_hits: u64, sample_count: u64, box_volume: f64) -> f64 {
    hit_ratio(total_hits, sample_count) * box_volume
}

/// A volume estimate together with the counts it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeEstimate {
    /// Estimated volume of the region.
    pub volume: f64,
    /// Samples classified as inside.
    pub hits: u64,
    /// Samples drawn.
    pub samples: u64,
    /// Volume of the sampling box.
    pub box_volume: f64,
}

impl VolumeEstimate {
    /// Builds an estimate from a hit count.
    pub fn new(hits: u64, samples: u64, box_volume: f64) -> Self {
        Self {
            volume: estimate_volume(hits, samples, box_volume),
            hits,
            samples,
            box_volume,
        }
    }

    /// Returns the hit ratio `hits / samples`.
    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        hit_ratio(self.hits, self.samples)
    }

    /// Relative error against a known reference volume.
    pub fn relative_error(&self, reference: f64) -> f64 {
        ((self.volume - reference) / reference).abs()
    }
}
