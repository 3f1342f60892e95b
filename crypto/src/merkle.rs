//! Merkle root over a block's transactions.
//!
//! Leaves are transaction ids; each level hashes adjacent pairs with double
//! SHA-256, pairing the last node with itself when a level has odd length.

use rev_types::{Hash256, Transaction};

use crate::hash::{hash_transaction, sha256d_multi};

/// Root over already-computed leaf hashes. An empty list yields zero.
pub fn merkle_root_from_hashes(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::ZERO;
    }
    let mut level: Vec<Hash256> = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                Hash256::new(sha256d_multi(&[left.as_bytes(), right.as_bytes()]))
            })
            .collect();
    }
    level[0]
}

/// Root over a transaction list.
pub fn merkle_root(transactions: &[Transaction]) -> Hash256 {
    let leaves: Vec<Hash256> = transactions.iter().map(hash_transaction).collect();
    merkle_root_from_hashes(&leaves)
}
