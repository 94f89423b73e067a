//! Estimator configuration: iteration count, seed and generator family.

use crate::constants::{DEFAULT_ITERATIONS, DEFAULT_SEED};
use crate::error::{EstimatorError, Result};

/// Pseudo-random generator family used for sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorKind {
    /// [`SplitMix64`](crate::prng::SplitMix64) seeded directly with the configured seed.
    #[default]
    SplitMix64,
    /// `rand`'s `SmallRng::seed_from_u64`.
    SmallRng,
    /// `SmallRng` seeded from OS entropy. Ignores the configured seed and is
    /// not reproducible.
    Entropy,
}

impl GeneratorKind {
    /// Short identifier used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::SplitMix64 => "splitmix64",
            GeneratorKind::SmallRng => "small-rng",
            GeneratorKind::Entropy => "entropy",
        }
    }
}

/// Reject an iteration count of zero.
pub fn validate_iterations(iterations: u64) -> Result<()> {
    if iterations == 0 {
        return Err(EstimatorError::InvalidArgument(
            "iteration count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Validated estimator parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    iterations: u64,
    seed: u64,
    generator: GeneratorKind,
}

impl EstimatorConfig {
    /// Rejects `iterations == 0`: the estimate would be 0/0.
    pub fn new(iterations: u64, seed: u64) -> Result<Self> {
        validate_iterations(iterations)?;
        Ok(Self {
            iterations,
            seed,
            generator: GeneratorKind::default(),
        })
    }

    pub fn with_generator(mut self, generator: GeneratorKind) -> Self {
        self.generator = generator;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generator(&self) -> GeneratorKind {
        self.generator
    }
}

impl Default for EstimatorConfig {
    /// 10,000,000 iterations, seed 35791246, SplitMix64.
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
            generator: GeneratorKind::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_constants() {
        let cfg = EstimatorConfig::default();
        assert_eq!(cfg.iterations(), 10_000_000);
        assert_eq!(cfg.seed(), 35_791_246);
        assert_eq!(cfg.generator(), GeneratorKind::SplitMix64);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = EstimatorConfig::new(0, 1).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_iteration_accepted() {
        let cfg = EstimatorConfig::new(1, 99).unwrap();
        assert_eq!(cfg.iterations(), 1);
        assert_eq!(cfg.seed(), 99);
    }

    #[test]
    fn test_with_generator() {
        let cfg = EstimatorConfig::new(10, 1)
            .unwrap()
            .with_generator(GeneratorKind::SmallRng);
        assert_eq!(cfg.generator(), GeneratorKind::SmallRng);
        assert_eq!(cfg.generator().name(), "small-rng");
    }
}
