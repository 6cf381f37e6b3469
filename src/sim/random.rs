//! Ball launch randomness
//!
//! The simulation only needs uniform floats, so the source sits behind a
//! trait and tests can script exact values.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform float source
pub trait RandomSource {
    /// Next value in [0, 1)
    fn next_unit(&mut self) -> f32;
}

/// Seeded PCG source used by real sessions
#[derive(Debug, Clone)]
pub struct PcgSource {
    seed: u64,
    rng: Pcg32,
}

impl PcgSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgSource {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

fn random_sign(rng: &mut impl RandomSource) -> f32 {
    if rng.next_unit() > 0.5 { 1.0 } else { -1.0 }
}

/// Launch direction: full x toward a random side, y in ±[0.25, 0.75)
pub fn random_direction(rng: &mut impl RandomSource) -> Vec2 {
    let x = random_sign(rng);
    let y = (rng.next_unit() * 0.5 + 0.25) * random_sign(rng);
    Vec2::new(x, y).normalize()
}
