//! Block header proof-of-work digest.
//!
//! The digest that identifies a block is owned by the consensus engine, so
//! it sits behind [`PowHasher`]. Two implementations live here:
//! [`Sha256dHasher`] and [`CheckpointHasher`], which answers from a table of
//! frozen header preimages and defers everything else to another hasher.

use std::collections::HashMap;

use rev_types::block::HEADER_SIZE;
use rev_types::{BlockHeader, Hash256};
use thiserror::Error;

use crate::hash::sha256d;

#[derive(Debug, Error)]
pub enum PowError {
    #[error("invalid checkpoint hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("checkpoint preimage must be {expected} bytes, got {actual}")]
    InvalidPreimage { expected: usize, actual: usize },

    #[error("invalid checkpoint hash: {0}")]
    InvalidHash(#[from] rev_types::TypesError),
}

/// Computes the identifying hash of a block header.
pub trait PowHasher: Send + Sync {
    fn hash_header(&self, header: &BlockHeader) -> Hash256;

    fn name(&self) -> &str;
}

/// Double SHA-256 over the 80-byte header.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256dHasher;

impl PowHasher for Sha256dHasher {
    fn hash_header(&self, header: &BlockHeader) -> Hash256 {
        Hash256::new(sha256d(&header.preimage()))
    }

    fn name(&self) -> &str {
        "sha256d"
    }
}

/// Known-answer hasher keyed by the exact header preimage.
///
/// A header whose bytes differ from every checkpoint in any position falls
/// through to `fallback`.
pub struct CheckpointHasher<H> {
    answers: HashMap<[u8; HEADER_SIZE], Hash256>,
    fallback: H,
}

impl<H: PowHasher> CheckpointHasher<H> {
    pub fn new(fallback: H) -> Self {
        Self {
            answers: HashMap::new(),
            fallback,
        }
    }

    pub fn insert(&mut self, preimage: [u8; HEADER_SIZE], hash: Hash256) {
        self.answers.insert(preimage, hash);
    }

    /// Add a checkpoint from a hex preimage and a display-order hex hash.
    pub fn with_checkpoint(mut self, preimage_hex: &str, hash_hex: &str) -> Result<Self, PowError> {
        let bytes = hex::decode(preimage_hex)?;
        let preimage: [u8; HEADER_SIZE] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| PowError::InvalidPreimage {
                    expected: HEADER_SIZE,
                    actual: bytes.len(),
                })?;
        let hash = Hash256::from_hex(hash_hex)?;
        self.insert(preimage, hash);
        Ok(self)
    }
}

impl<H: PowHasher> PowHasher for CheckpointHasher<H> {
    fn hash_header(&self, header: &BlockHeader) -> Hash256 {
        match self.answers.get(&header.preimage()) {
            Some(hash) => *hash,
            None => self.fallback.hash_header(header),
        }
    }

    fn name(&self) -> &str {
        "checkpoint"
    }
}
