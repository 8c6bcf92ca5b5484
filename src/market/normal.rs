//! Seedable standard-normal source.

use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg64;

/// Produces independent N(0, 1) draws from a single PCG stream.
///
/// A seeded source replays the same sequence bit-for-bit; an unseeded one
/// draws its state from OS entropy.
pub struct NormalSource {
    /// Random number generator
    rng: Pcg64,
}

impl NormalSource {
    /// Create a new source, seeded if `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => Pcg64::seed_from_u64(s),
            None => Pcg64::from_entropy(),
        };
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    /// Reinitialize the stream deterministically.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = Pcg64::seed_from_u64(seed);
    }

    /// Draw one standard-normal sample.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}
