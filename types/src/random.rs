//! Randomness seam.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// A value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u64) -> u64;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<ThreadRng> {
    /// The thread-local generator.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, bound: u64) -> u64 {
        self.0.gen_range(0..bound)
    }
}
