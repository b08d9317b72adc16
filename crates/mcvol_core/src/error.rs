//! Error types for domain construction.

use thiserror::Error;

use crate::domain::Axis;

/// Errors raised while constructing a [`SamplingDomain`](crate::SamplingDomain).
///
/// # Examples
/// ```
/// use mcvol_core::{Axis, DomainError};
///
/// let err = DomainError::InvertedAxis { axis: Axis::Y, min: 1.0, max: -1.0 };
/// assert_eq!(format!("{}", err), "Inverted y axis: min 1 > max -1");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Lower bound exceeds the upper bound on an axis.
    #[error("Inverted {axis} axis: min {min} > max {max}")]
    InvertedAxis {
        /// Offending axis
        axis: Axis,
        /// Lower bound as supplied
        min: f64,
        /// Upper bound as supplied
        max: f64,
    },

    /// A bound is NaN or infinite.
    #[error("Non-finite bound on {axis} axis")]
    NonFiniteBound {
        /// Offending axis
        axis: Axis,
    },

    /// The axis extent `max - min` overflows.
    #[error("Extent of {axis} axis overflows")]
    ExtentOverflow {
        /// Offending axis
        axis: Axis,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_display() {
        let err = DomainError::NonFiniteBound { axis: Axis::Z };
        assert_eq!(err.to_string(), "Non-finite bound on z axis");
    }

    #[test]
    fn test_inverted_display_contains_bounds() {
        let err = DomainError::InvertedAxis {
            axis: Axis::X,
            min: 2.5,
            max: 0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("x axis"));
        assert!(msg.contains("2.5"));
        assert!(msg.contains("0.5"));
    }
}
