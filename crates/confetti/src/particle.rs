//! Particle motion profiles
//!
//! A particle is nothing but a handful of random coefficients fixed at
//! creation. Its on-screen motion comes from interpolating the shared
//! explosion clock through those coefficients (see [`crate::transform`]).

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Range of the horizontal landing fraction
pub const LEFT_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Lowest peak height fraction; keeps every piece inside a plausible band
pub const TOP_MIN: f32 = 0.7;
/// Range of the peak height fraction
pub const TOP_RANGE: RangeInclusive<f32> = TOP_MIN..=1.0;
/// Range of the sway amplitude factor
pub const SWING_RANGE: RangeInclusive<f32> = 0.2..=1.0;
/// Range of each rotation speed factor
pub const SPEED_RANGE: RangeInclusive<f32> = 0.3..=1.0;

/// Per-axis spin rate factors
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpeedDelta {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
}

/// Random motion profile of one confetti piece
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Particle {
    /// Horizontal landing point as a fraction of screen width
    pub left_delta: f32,
    /// Peak height as a fraction of screen height; also how long the fall
    /// lasts on the clock
    pub top_delta: f32,
    /// Sway amplitude factor
    pub swing_delta: f32,
    pub speed_delta: SpeedDelta,
}

impl Particle {
    /// Sample every field independently from its range
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_delta: random_value(rng, &LEFT_RANGE),
            top_delta: random_value(rng, &TOP_RANGE),
            swing_delta: random_value(rng, &SWING_RANGE),
            speed_delta: SpeedDelta {
                rotate_x: random_value(rng, &SPEED_RANGE),
                rotate_y: random_value(rng, &SPEED_RANGE),
                rotate_z: random_value(rng, &SPEED_RANGE),
            },
        }
    }
}

/// Uniform sample from an inclusive range
pub fn random_value<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f32>) -> f32 {
    rng.gen_range(range.clone())
}

/// Produces particle lists from a seedable RNG
#[derive(Clone, Debug)]
pub struct ParticleGenerator {
    rng: ChaCha8Rng,
}

impl ParticleGenerator {
    /// A generator with a fixed seed, or a random one when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Produce exactly `count` independent particles
    pub fn generate(&mut self, count: usize) -> Vec<Particle> {
        (0..count).map(|_| Particle::random(&mut self.rng)).collect()
    }
}
