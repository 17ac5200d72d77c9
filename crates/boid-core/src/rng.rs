//! Deterministic RNG stream used for agent placement.
//!
//! # Determinism strategy
//!
//! The kernel itself is random-free; randomness only enters at spawn time.
//! A single `SmallRng` seeded from the run's global seed drives placement, so
//! the same seed and the same spawn order always produce the same initial
//! transforms.  Child streams are derived by mixing an offset with the
//! 64-bit fractional part of the golden ratio, which spreads consecutive
//! offsets uniformly across the seed space.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::math::FORWARD;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for spawn-time placement.
///
/// Used only in single-threaded contexts.  If placement ever moves onto
/// worker threads, give each worker its own stream via [`SpawnRng::child`].
pub struct SpawnRng(SmallRng);

impl SpawnRng {
    pub fn new(seed: u64) -> Self {
        SpawnRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child stream with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SpawnRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SpawnRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniformly distributed unit quaternion (Shoemake's method).
    pub fn rotation(&mut self) -> Quat {
        let u1: f32 = self.0.r#gen();
        let u2: f32 = self.0.r#gen();
        let u3: f32 = self.0.r#gen();

        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();
        Quat::from_xyzw(
            a * (TAU * u2).sin(),
            a * (TAU * u2).cos(),
            b * (TAU * u3).sin(),
            b * (TAU * u3).cos(),
        )
        .normalize()
    }

    /// Uniformly distributed unit direction.
    #[inline]
    pub fn direction(&mut self) -> Vec3 {
        self.rotation() * FORWARD
    }

    /// Distance in `[0, max)`; returns `0.0` when `max <= 0`.
    #[inline]
    pub fn distance(&mut self, max: f32) -> f32 {
        if max > 0.0 { self.0.gen_range(0.0..max) } else { 0.0 }
    }
}
