/// Source of secret numbers.
///
/// The session only needs "a number in `[1, bound]`", so randomness sits
/// behind a one-method trait and tests can script the draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait SecretSource {
    /// Draw a number in `[1, upper]`. `upper` is always at least 1.
    fn draw(&mut self, upper: u64) -> u64;
}

pub struct RandomSecret {
    rng: StdRng,
}

impl RandomSecret {
    /// Seeded when `seed` is given, so a whole session can be replayed.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RandomSecret { rng }
    }
}

impl SecretSource for RandomSecret {
    fn draw(&mut self, upper: u64) -> u64 {
        self.rng.gen_range(1..=upper.max(1))
    }
}
