//! # mcvol Core (Layer 1: Geometry)
//!
//! ## Layer 1 Role
//!
//! mcvol_core holds the pure, stateless pieces of the Monte Carlo volume
//! estimator:
//! - [`SamplingDomain`]: the immutable axis-aligned box points are drawn from
//! - [`Region`]: the membership predicate classifying a point as inside/outside
//! - [`estimator`]: conversion of a hit count into a volume estimate
//!
//! Nothing in this crate allocates, spawns threads or touches shared state,
//! so every item is safe to share read-only across sampling workers.
//!
//! ## Usage Example
//!
//! ```rust
//! use mcvol_core::{estimate_volume, Piriform, Region, SamplingDomain};
//!
//! let domain = SamplingDomain::<f64>::reference();
//! let region = Piriform::<f64>::reference();
//!
//! assert!(region.contains(1.0, 0.0, 0.0));
//! assert!(!region.contains(1.0, 0.6, 0.6));
//!
//! // 3 hits out of 8 samples over the reference box
//! let volume = estimate_volume(3, 8, domain.volume());
//! assert!((volume - 3.38 * 3.0 / 8.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod domain;
pub mod error;
pub mod estimator;
pub mod region;

pub use domain::{Axis, SamplingDomain};
pub use error::DomainError;
pub use estimator::{estimate_volume, hit_ratio, VolumeEstimate};
pub use region::{Piriform, Region};
