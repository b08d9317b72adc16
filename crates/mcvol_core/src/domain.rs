//! Axis-aligned sampling domain.
//!
//! A [`SamplingDomain`] is the box trial points are drawn from. It serves two
//! purposes: it bounds the uniform draws, and its volume scales the observed
//! hit ratio into a volume estimate.
//!
//! The domain is an explicitly constructed immutable value. It is created once
//! before sampling and shared read-only by every worker.

use num_traits::Float;
use std::fmt;

use crate::error::DomainError;

/// Half-width of the reference box on the y and z axes.
const REFERENCE_HALF_WIDTH: f64 = 0.65;

/// Length of the reference box along the x axis.
const REFERENCE_LENGTH: f64 = 2.0;

/// Coordinate axis of a [`SamplingDomain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis
    X,
    /// The y axis
    Y,
    /// The z axis
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Immutable axis-aligned bounding box.
///
/// Invariants (enforced by [`SamplingDomain::new`]):
/// - every bound is finite
/// - `xmin <= xmax`, `ymin <= ymax`, `zmin <= zmax`
///
/// Degenerate axes (`min == max`) are accepted; such a domain has zero volume.
///
/// # Examples
///
/// ```rust
/// use mcvol_core::SamplingDomain;
///
/// let domain = SamplingDomain::new(0.0, 2.0, -0.65, 0.65, -0.65, 0.65).unwrap();
/// assert!((domain.volume() - 3.38_f64).abs() < 1e-12);
///
/// assert!(SamplingDomain::new(1.0, 0.0, 0.0, 1.0, 0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingDomain<T: Float> {
    x: (T, T),
    y: (T, T),
    z: (T, T),
}

impl<T: Float> SamplingDomain<T> {
    /// Creates a validated domain from six bounds.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NonFiniteBound`] if any bound is NaN or infinite
    /// - [`DomainError::InvertedAxis`] if `min > max` on any axis
    /// - [`DomainError::ExtentOverflow`] if `max - min` is not representable
    pub fn new(xmin: T, xmax: T, ymin: T, ymax: T, zmin: T, zmax: T) -> Result<Self, DomainError> {
        check_axis(Axis::X, xmin, xmax)?;
        check_axis(Axis::Y, ymin, ymax)?;
        check_axis(Axis::Z, zmin, zmax)?;

        Ok(Self {
            x: (xmin, xmax),
            y: (ymin, ymax),
            z: (zmin, zmax),
        })
    }

    /// The fixed reference box `[0, 2] x [-0.65, 0.65] x [-0.65, 0.65]`.
    ///
    /// It encloses the reference [`Piriform`](crate::Piriform) region and has
    /// volume `2 * 1.3 * 1.3 = 3.38`.
    pub fn reference() -> Self {
        let half = T::from(REFERENCE_HALF_WIDTH).unwrap();
        Self {
            x: (T::zero(), T::from(REFERENCE_LENGTH).unwrap()),
            y: (-half, half),
            z: (-half, half),
        }
    }

    /// Returns `(min, max)` for the x axis.
    #[inline]
    pub fn x_range(&self) -> (T, T) {
        self.x
    }

    /// Returns `(min, max)` for the y axis.
    #[inline]
    pub fn y_range(&self) -> (T, T) {
        self.y
    }

    /// Returns `(min, max)` for the z axis.
    #[inline]
    pub fn z_range(&self) -> (T, T) {
        self.z
    }

    /// Returns `(min, max)` for the given axis.
    #[inline]
    pub fn range(&self, axis: Axis) -> (T, T) {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns the six bounds as `[xmin, xmax, ymin, ymax, zmin, zmax]`.
    pub fn bounds(&self) -> [T; 6] {
        [self.x.0, self.x.1, self.y.0, self.y.1, self.z.0, self.z.1]
    }

    /// Box volume `(xmax - xmin)(ymax - ymin)(zmax - zmin)`.
    #[inline]
    pub fn volume(&self) -> T {
        (self.x.1 - self.x.0) * (self.y.1 - self.y.0) * (self.z.1 - self.z.0)
    }

    /// Box volume widened to `f64` for the estimator.
    #[inline]
    pub fn volume_f64(&self) -> f64 {
        self.volume().to_f64().unwrap_or(f64::NAN)
    }

    /// Returns true if the point lies in the closed box.
    pub fn contains_point(&self, x: T, y: T, z: T) -> bool {
        x >= self.x.0
            && x <= self.x.1
            && y >= self.y.0
            && y <= self.y.1
            && z >= self.z.0
            && z <= self.z.1
    }
}

fn check_axis<T: Float>(axis: Axis, min: T, max: T) -> Result<(), DomainError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(DomainError::NonFiniteBound { axis });
    }
    if min > max {
        return Err(DomainError::InvertedAxis {
            axis,
            min: min.to_f64().unwrap_or(f64::NAN),
            max: max.to_f64().unwrap_or(f64::NAN),
        });
    }
    if !(max - min).is_finite() {
        return Err(DomainError::ExtentOverflow { axis });
    }
    Ok(())
}
