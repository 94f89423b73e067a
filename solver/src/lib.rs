//! # Monte Carlo π estimator
//!
//! Estimates π by sampling points uniformly in the unit square and counting
//! the fraction that falls inside the quarter unit circle:
//! `π ≈ 4 · inside / N`.
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | Configure | [`config`] | Validated iteration count, seed and generator family |
//! | Sample | [`prng`] | Locally owned generators producing draws in [0, 1) |
//! | Count | [`estimator`] | Two draws per iteration, quarter-circle test, hit counter |
//! | Report | [`format`] | `%g`-style rendering of the result line |
//!
//! ## Determinism
//!
//! Same seed and same generator family give a bit-identical hit count and
//! estimate. The default generator is SplitMix64 seeded with 35791246; the
//! default run draws 10,000,000 samples.

pub mod config;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod estimator;
pub mod format;
pub mod prng;

pub use config::{EstimatorConfig, GeneratorKind};
pub use error::{EstimatorError, Result};
pub use estimator::{estimate_series, estimate_with, run, Estimate};
