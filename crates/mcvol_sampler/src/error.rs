//! Error types for the sampling engine.
//!
//! Configuration errors are raised while building a
//! [`SamplerConfig`](crate::SamplerConfig); the sampling loop itself never
//! fails once started.

use thiserror::Error;

/// Configuration error for the sampler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Worker count must be at least one.
    #[error("Invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),

    /// Chunk size must be at least one trial.
    #[error("Invalid chunk size {0}: must be at least 1")]
    InvalidChunkSize(usize),
}

/// Error returned by [`ParallelSampler::run`](crate::ParallelSampler::run).
#[derive(Debug, Error)]
pub enum SamplerError {
    /// Invalid sampler configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidWorkerCount(0);
        assert!(err.to_string().contains("Invalid worker count 0"));

        let err = ConfigError::InvalidChunkSize(0);
        assert!(err.to_string().contains("Invalid chunk size 0"));
    }

    #[test]
    fn test_sampler_error_wraps_config() {
        let err: SamplerError = ConfigError::InvalidChunkSize(0).into();
        assert!(matches!(err, SamplerError::Config(_)));
        assert_eq!(err.to_string(), "Invalid chunk size 0: must be at least 1");
    }
}
