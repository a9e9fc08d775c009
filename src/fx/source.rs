//! Pluggable randomness and wall-clock time for cosmetic effect rules
//!
//! Engine flicker draws from a [`RandomSource`] and the warp charge glow
//! reads a [`TimeSource`]. Both are injected into the engine so tests can
//! pin them down while games keep the ambient behavior.

use std::fmt;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform samples in [0, 1)
pub trait RandomSource: fmt::Debug {
    fn next_unit(&mut self) -> f32;
}

/// Seconds on some monotonic clock
pub trait TimeSource: fmt::Debug {
    fn now_seconds(&self) -> f64;
}

/// PCG-backed random source
#[derive(Debug, Clone)]
pub struct PcgRandom {
    seed: u64,
    rng: Pcg32,
}

impl PcgRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Always returns the same value (clamped into [0, 1))
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f32);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.0.is_finite() {
            self.0.clamp(0.0, 1.0 - f32::EPSILON)
        } else {
            0.0
        }
    }
}

/// Seconds since construction on the OS monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// A clock stopped at a given time
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub f64);

impl TimeSource for FixedClock {
    fn now_seconds(&self) -> f64 {
        self.0
    }
}
