//! Double SHA-256 hashing for transactions and headers.

use rev_types::{Encodable, Hash256, Transaction};
use sha2::{Digest, Sha256};

/// SHA-256 applied twice.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut output = [0u8; 32];
    output.copy_from_slice(&second);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256d_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let first = hasher.finalize();
    let second = Sha256::digest(first);
    let mut output = [0u8; 32];
    output.copy_from_slice(&second);
    output
}

/// Transaction id: double SHA-256 of the consensus encoding.
pub fn hash_transaction(tx: &Transaction) -> Hash256 {
    Hash256::new(sha256d(&tx.to_bytes()))
}
