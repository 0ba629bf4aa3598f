use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform token draws from a seeded small RNG, reproducible for a given seed.
#[derive(Clone, Debug)]
pub struct RandomTokenSource {
    seed: u64,
    rng: SmallRng,
}

impl RandomTokenSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TokenSource for RandomTokenSource {
    fn draw(&mut self, palette: &[Token]) -> Token {
        palette[self.rng.random_range(0..palette.len())]
    }
}
