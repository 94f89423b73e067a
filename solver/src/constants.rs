//! Reference constants for the estimator.
//!
//! The defaults reproduce the classic run: ten million points drawn from a
//! generator seeded with 35791246.

/// Number of (x, y) samples drawn by a default run.
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Seed used by a default run.
pub const DEFAULT_SEED: u64 = 35_791_246;

/// Fixed label printed before the estimate.
pub const OUTPUT_LABEL: &str = "estimate of pi is";

/// Significant digits used when rendering the estimate (C `%g` default).
pub const OUTPUT_SIGNIFICANT_DIGITS: usize = 6;

/// Radius² of the quarter circle; a sample is inside when `x² + y² <= 1`.
pub const UNIT_RADIUS_SQ: f64 = 1.0;

/// Area ratio scale: quarter circle / unit square = π/4.
pub const QUADRANT_SCALE: f64 = 4.0;
