//! Membership predicates.
//!
//! A [`Region`] decides whether a point lies inside the solid whose volume is
//! being estimated. Implementations must be pure: no interior mutability and
//! no dependence on call order, so that any number of workers can call
//! [`Region::contains`] concurrently without synchronisation.
//!
//! Any `Fn(T, T, T) -> bool + Sync` closure is a region, which keeps ad-hoc
//! test shapes (spheres, half-spaces) one line long.

use num_traits::Float;
use std::f64::consts::PI;

use crate::domain::SamplingDomain;
use crate::error::DomainError;

/// Half-width of the piriform bounding box, relative to the length `a`.
///
/// The widest cross-section sits at `x = 3a/4` with radius `a * sqrt(27) / 16`
/// (about `0.3248 a`), rounded up to a tidy constant.
const BOUNDING_HALF_WIDTH_RATIO: f64 = 0.325;

/// Membership predicate over 3-D points.
pub trait Region<T: Float>: Sync {
    /// Returns true if `(x, y, z)` lies inside the region.
    fn contains(&self, x: T, y: T, z: T) -> bool;
}

impl<T, F> Region<T> for F
where
    T: Float,
    F: Fn(T, T, T) -> bool + Sync,
{
    #[inline]
    fn contains(&self, x: T, y: T, z: T) -> bool {
        self(x, y, z)
    }
}

/// Piriform (pear-shaped) solid of revolution about the x axis.
///
/// The solid is `{ (x, y, z) : a²(y² + z²) - a·x³ + x⁴ <= 0 }`, spanning
/// `0 <= x <= a`. The reference instance uses `a = 2`, i.e.
/// `2²(y² + z²) - 2x³ + x⁴ <= 0`.
///
/// Points on the surface (level exactly zero) are classified as inside.
/// NaN coordinates are classified as outside.
///
/// # Examples
///
/// ```rust
/// use mcvol_core::{Piriform, Region};
///
/// let pear = Piriform::<f64>::reference();
/// assert!(pear.contains(1.5, 0.3, 0.0));
/// assert!(!pear.contains(-0.1, 0.0, 0.0));
/// assert!((pear.exact_volume() - 0.4 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piriform<T: Float> {
    a: T,
}

impl<T: Float> Piriform<T> {
    /// Creates a piriform of length `a` along the x axis.
    pub fn new(a: T) -> Self {
        Self { a }
    }

    /// The reference solid with `a = 2`.
    pub fn reference() -> Self {
        Self::new(T::from(2.0).unwrap())
    }

    /// Length of the solid along the x axis.
    #[inline]
    pub fn length(&self) -> T {
        self.a
    }

    /// Left-hand side of the defining inequality.
    ///
    /// Negative inside, positive outside, zero on the surface.
    #[inline]
    pub fn level(&self, x: T, y: T, z: T) -> T {
        let a = self.a;
        let x3 = x * x * x;
        a * a * (y * y + z * z) - a * x3 + x3 * x
    }

    /// Analytic enclosed volume `π a³ / 20`.
    ///
    /// Each cross-section at `x` is a disc of radius² `(a x³ - x⁴) / a²`;
    /// integrating `π r²` over `[0, a]` gives `π a³ / 20`.
    pub fn exact_volume(&self) -> f64 {
        let a = self.a.to_f64().unwrap_or(f64::NAN);
        PI * a * a * a / 20.0
    }

    /// Axis-aligned box enclosing the solid.
    ///
    /// For `a = 2` this equals [`SamplingDomain::reference`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if `a` is negative or not finite.
    pub fn bounding_domain(&self) -> Result<SamplingDomain<T>, DomainError> {
        let half = self.a * T::from(BOUNDING_HALF_WIDTH_RATIO).unwrap();
        SamplingDomain::new(T::zero(), self.a, -half, half, -half, half)
    }
}

impl<T: Float + Sync> Region<T> for Piriform<T> {
    #[inline]
    fn contains(&self, x: T, y: T, z: T) -> bool {
        self.level(x, y, z) <= T::zero()
    }
}
