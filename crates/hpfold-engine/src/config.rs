//! Sampler configuration and validation.

use std::error::Error;
use std::fmt;

/// Configuration for a [`Sampler`](crate::sampler::Sampler) batch.
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// Number of independent samples to generate. Default: 256.
    pub samples: u64,
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[2, 16]`).
    pub workers: Option<usize>,
    /// Base RNG seed. Sample `i` draws from a ChaCha8 stream seeded
    /// `seed XOR i`, so a batch is reproducible from this one value.
    /// Default: 42.
    pub seed: u64,
    /// Optional ceiling on a single run's backtrack count. Runs that
    /// exceed it are reported, not retried. Default: none.
    pub backtrack_ceiling: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples: 256,
            workers: None,
            seed: 42,
            backtrack_ceiling: None,
        }
    }
}

impl SamplerConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if
    /// `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`; zero workers would
    /// deadlock the batch. The count is further capped by the sample
    /// count — idle workers are never spawned.
    pub fn resolved_worker_count(&self) -> usize {
        let resolved = match self.workers {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        };
        let samples = usize::try_from(self.samples).unwrap_or(usize::MAX);
        resolved.min(samples.max(1))
    }
}

/// Errors detected during [`SamplerConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The batch requests zero samples.
    ZeroSamples,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSamples => write!(f, "samples must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SamplerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_samples_is_rejected() {
        let config = SamplerConfig {
            samples: 0,
            ..SamplerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSamples));
    }

    #[test]
    fn worker_count_clamps_zero() {
        let config = SamplerConfig {
            workers: Some(0),
            ..SamplerConfig::default()
        };
        assert_eq!(config.resolved_worker_count(), 1);
    }

    #[test]
    fn worker_count_clamps_large() {
        let config = SamplerConfig {
            workers: Some(500),
            ..SamplerConfig::default()
        };
        assert_eq!(config.resolved_worker_count(), 64);
    }

    #[test]
    fn worker_count_never_exceeds_samples() {
        let config = SamplerConfig {
            samples: 3,
            workers: Some(16),
            ..SamplerConfig::default()
        };
        assert_eq!(config.resolved_worker_count(), 3);
    }

    #[test]
    fn worker_count_auto_is_sane() {
        let config = SamplerConfig::default();
        let count = config.resolved_worker_count();
        assert!((1..=16).contains(&count), "auto count {count} out of range");
    }
}
