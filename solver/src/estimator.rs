//! Monte Carlo sampling loop.
//!
//! Draws `(x, y)` pairs in [0, 1)², counts those with `x² + y² <= 1` and
//! scales the hit ratio by 4. The generator is owned by the caller and passed
//! in by reference, so the loop has no hidden state beyond its own counter.

use std::f64::consts::PI;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::{validate_iterations, EstimatorConfig, GeneratorKind};
use crate::constants::{QUADRANT_SCALE, UNIT_RADIUS_SQ};
use crate::error::Result;
use crate::prng::{SmallRngSampler, SplitMix64, UnitSampler};

/// Outcome of one estimator run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// Samples drawn.
    pub iterations: u64,
    /// Samples inside the quarter circle. Never exceeds `iterations`.
    pub inside: u64,
    /// `inside / iterations * 4`.
    pub value: f64,
}

impl Estimate {
    fn from_counts(iterations: u64, inside: u64) -> Self {
        // Divide first, then scale.
        let value = (inside as f64 / iterations as f64) * QUADRANT_SCALE;
        Self {
            iterations,
            inside,
            value,
        }
    }

    /// Absolute distance from π.
    pub fn abs_error(&self) -> f64 {
        (self.value - PI).abs()
    }
}

/// Quarter-circle membership test.
#[inline(always)]
pub fn in_quadrant(x: f64, y: f64) -> bool {
    let z = x * x + y * y;
    z <= UNIT_RADIUS_SQ
}

/// Count quadrant hits over `iterations` samples. Takes exactly two draws per sample.
pub fn count_inside<S: UnitSampler>(rng: &mut S, iterations: u64) -> u64 {
    let mut inside = 0u64;
    for _ in 0..iterations {
        let x = rng.next_unit();
        let y = rng.next_unit();
        if in_quadrant(x, y) {
            inside += 1;
        }
    }
    inside
}

/// Run the sampling loop with a caller-supplied sampler.
///
/// Fails with [`InvalidArgument`](crate::error::EstimatorError::InvalidArgument) when `iterations` is zero;
/// no draws are taken in that case.
pub fn estimate_with<S: UnitSampler>(rng: &mut S, iterations: u64) -> Result<Estimate> {
    validate_iterations(iterations)?;
    let inside = count_inside(rng, iterations);
    Ok(Estimate::from_counts(iterations, inside))
}

/// Build the configured generator and run the estimator.
pub fn run(config: &EstimatorConfig) -> Result<Estimate> {
    let start = Instant::now();
    debug!(
        iterations = config.iterations(),
        seed = config.seed(),
        generator = config.generator().name(),
        "starting estimator"
    );

    let estimate = match config.generator() {
        GeneratorKind::SplitMix64 => {
            let mut rng = SplitMix64::new(config.seed());
            estimate_with(&mut rng, config.iterations())?
        }
        GeneratorKind::SmallRng => {
            let mut rng = SmallRngSampler::seed_from_u64(config.seed());
            estimate_with(&mut rng, config.iterations())?
        }
        GeneratorKind::Entropy => {
            let mut rng = SmallRngSampler::try_from_os_rng()?;
            estimate_with(&mut rng, config.iterations())?
        }
    };

    info!(
        inside = estimate.inside,
        iterations = estimate.iterations,
        value = estimate.value,
        abs_error = estimate.abs_error(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "estimate complete"
    );
    Ok(estimate)
}

/// Run the estimator for each iteration count with the same seed and generator.
pub fn estimate_series(
    iteration_counts: &[u64],
    seed: u64,
    generator: GeneratorKind,
) -> Result<Vec<Estimate>> {
    iteration_counts
        .iter()
        .map(|&n| {
            let config = EstimatorConfig::new(n, seed)?.with_generator(generator);
            run(&config)
        })
        .collect()
}
