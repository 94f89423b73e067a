//! Uniform samplers for the estimator — SplitMix64 plus adapters over `rand`.
//!
//! Every sampler exposes a raw integer output bounded by [`UnitSampler::RAW_MAX`].
//! A unit draw divides the raw value by `RAW_MAX + 1`, so it always lies in
//! [0, 1). Both shipped generators keep the top 53 bits of a `u64`, which makes
//! the division exact in `f64`. Dividing by `RAW_MAX` itself, as C's
//! `rand() / RAND_MAX` does, would let a draw reach exactly 1.0.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::error::{EstimatorError, Result};

/// Raw-output bound for samplers that keep 53 bits of a `u64`.
pub const RAW_MAX_53: u64 = (1u64 << 53) - 1;

/// Source of uniform draws in [0, 1).
pub trait UnitSampler {
    /// Largest value [`next_raw`](Self::next_raw) can return.
    const RAW_MAX: u64;

    /// Next raw output in `0..=RAW_MAX`.
    fn next_raw(&mut self) -> u64;

    /// Next uniform value in [0, 1).
    #[inline(always)]
    fn next_unit(&mut self) -> f64 {
        let raw = self.next_raw() as f64;
        let range = Self::RAW_MAX as f64 + 1.0;
        raw / range
    }
}

/// SplitMix64 PRNG — single u64 state, excellent statistical quality.
#[derive(Clone, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl UnitSampler for SplitMix64 {
    const RAW_MAX: u64 = RAW_MAX_53;

    #[inline(always)]
    fn next_raw(&mut self) -> u64 {
        self.next_u64() >> 11
    }
}

/// Adapter that turns any `rand` generator into a [`UnitSampler`].
#[derive(Clone, Debug)]
pub struct RandSampler<R> {
    rng: R,
}

impl<R: RngCore> RandSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the underlying `rand` generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + SeedableRng> RandSampler<R> {
    /// Deterministic construction from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy. Fails when the OS source is unavailable.
    pub fn try_from_os_rng() -> Result<Self> {
        R::try_from_os_rng()
            .map(Self::new)
            .map_err(|e| EstimatorError::Startup(format!("OS entropy unavailable: {e}")))
    }
}

impl<R: RngCore> UnitSampler for RandSampler<R> {
    const RAW_MAX: u64 = RAW_MAX_53;

    #[inline(always)]
    fn next_raw(&mut self) -> u64 {
        self.rng.next_u64() >> 11
    }
}

/// `SmallRng` wrapped as a sampler.
pub type SmallRngSampler = RandSampler<SmallRng>;

/// Wraps a sampler and counts raw draws.
#[derive(Clone, Debug)]
pub struct CountingSampler<S> {
    inner: S,
    draws: u64,
}

impl<S: UnitSampler> CountingSampler<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, draws: 0 }
    }

    /// Number of raw draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Unwrap the counted sampler.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: UnitSampler> UnitSampler for CountingSampler<S> {
    const RAW_MAX: u64 = S::RAW_MAX;

    #[inline(always)]
    fn next_raw(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_raw()
    }
}
