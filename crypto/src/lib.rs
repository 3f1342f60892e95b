//! Hashing primitives for the Rev node.
//!
//! - **Double SHA-256** for transaction ids and Merkle trees
//! - **Header digest** behind the [`PowHasher`] seam, so the consensus
//!   engine can supply the network's proof-of-work function

pub mod hash;
pub mod merkle;
pub mod pow;

pub use hash::{hash_transaction, sha256d, sha256d_multi};
pub use merkle::{merkle_root, merkle_root_from_hashes};
pub use pow::{CheckpointHasher, PowError, PowHasher, Sha256dHasher};
