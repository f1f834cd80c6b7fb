use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform randomness for the tie-break and the main-number draw.
///
/// Tests swap in a scripted implementation; the binary uses [`RngSource`].
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `count` distinct values from `low..=high`, without replacement, in the
    /// order they were drawn.
    fn sample_distinct(&mut self, low: u32, high: u32, count: usize) -> Vec<u32>;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded when `seed` is given, otherwise from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(StdRng::seed_from_u64(seed)),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn sample_distinct(&mut self, low: u32, high: u32, count: usize) -> Vec<u32> {
        let span = (high - low + 1) as usize;
        rand::seq::index::sample(&mut self.rng, span, count)
            .into_iter()
            .map(|offset| low + offset as u32)
            .collect()
    }
}
