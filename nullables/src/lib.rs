//! Nullable infrastructure for deterministic testing.
//!
//! Time and randomness are abstracted behind the `Clock` and `RandomSource`
//! traits in `rev-types`. This crate provides test-friendly implementations
//! that:
//! - Return deterministic values
//! - Can be controlled programmatically
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod random;

pub use clock::NullClock;
pub use random::NullRandom;
