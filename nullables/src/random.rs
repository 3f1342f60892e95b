//! Nullable random — deterministic random number generation.

use rev_types::RandomSource;

/// A deterministic random source for testing.
///
/// Returns pre-configured values in order, cycling when exhausted. Each
/// value is reduced modulo the requested bound, so `u64::MAX` yields the top
/// of any range and `0` the bottom.
pub struct NullRandom {
    outputs: Vec<u64>,
    index: usize,
}

impl NullRandom {
    /// Create with a sequence of deterministic values.
    ///
    /// # Panics
    /// Panics if `outputs` is empty.
    pub fn new(outputs: Vec<u64>) -> Self {
        assert!(!outputs.is_empty(), "NullRandom needs at least one value");
        Self { outputs, index: 0 }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values handed out so far.
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl RandomSource for NullRandom {
    fn below(&mut self, bound: u64) -> u64 {
        let value = self.outputs[self.index % self.outputs.len()];
        self.index += 1;
        if value == u64::MAX {
            bound - 1
        } else {
            value % bound
        }
    }
}
