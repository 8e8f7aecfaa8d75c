//! Choice of the one reference article that gets a deep content check.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub enum SpotCheck {
    /// Uniform draw from a seedable generator.
    Seeded(StdRng),
    /// Always the same index, wrapped into range.
    Fixed(usize),
}

impl SpotCheck {
    /// Seeded from `seed` when given, otherwise from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SpotCheck::Seeded(StdRng::seed_from_u64(seed)),
            None => SpotCheck::Seeded(StdRng::from_os_rng()),
        }
    }

    /// Index into a sequence of `len` links. `len` must be non-zero.
    pub fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "nothing to pick from");
        match self {
            SpotCheck::Seeded(rng) => rng.random_range(0..len),
            SpotCheck::Fixed(index) => *index % len,
        }
    }
}
