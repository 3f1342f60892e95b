//! Block and block header model.

use serde::{Deserialize, Serialize};

use crate::encode::Encodable;
use crate::hash::Hash256;
use crate::transaction::Transaction;

/// Serialized header length.
pub const HEADER_SIZE: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    /// Compact-encoded target.
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// The exact bytes the block hash is computed over.
    pub fn preimage(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_block.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.preimage());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn is_genesis_shaped(&self) -> bool {
        self.header.prev_block.is_zero()
            && self.transactions.len() == 1
            && self.transactions[0].is_coinbase()
    }
}
