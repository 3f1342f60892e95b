use std::fmt;

use rev_types::{Hash256, Network};
use thiserror::Error;

/// Which genesis identity constant failed to reproduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenesisField {
    Hash,
    MerkleRoot,
}

impl fmt::Display for GenesisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash => f.write_str("block hash"),
            Self::MerkleRoot => f.write_str("merkle root"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChainParamsError {
    /// The rebuilt genesis block does not match the frozen network identity.
    #[error("{network} genesis {field} mismatch: expected {expected}, computed {actual}")]
    GenesisMismatch {
        network: Network,
        field: GenesisField,
        expected: Hash256,
        actual: Hash256,
    },

    #[error("testnet and regtest cannot both be selected")]
    ConflictingNetworkSelection,

    #[error("unsupported network variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid {what} literal: {reason}")]
    InvalidLiteral { what: &'static str, reason: String },

    #[error("genesis checkpoint: {0}")]
    Checkpoint(#[from] rev_crypto::PowError),
}

impl ChainParamsError {
    /// Errors that must stop the process before any dependent subsystem runs.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::ConflictingNetworkSelection)
    }
}

impl From<rev_types::TypesError> for ChainParamsError {
    fn from(err: rev_types::TypesError) -> Self {
        match err {
            rev_types::TypesError::UnsupportedNetwork(tag) => Self::UnsupportedVariant(tag),
            other => Self::InvalidLiteral {
                what: "hash",
                reason: other.to_string(),
            },
        }
    }
}
