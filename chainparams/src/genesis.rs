//! Genesis block construction and verification.
//!
//! The genesis block is rebuilt from its recipe at every start and compared
//! against the frozen identity of the network. The builder never searches
//! for a nonce; nonces were found offline and are part of the recipe.

use rev_crypto::{merkle_root, CheckpointHasher, PowHasher, Sha256dHasher};
use rev_types::{Amount, Block, BlockHeader, Hash256, Network, Script, Transaction, TxIn, TxOut};
use tracing::{debug, error};

use crate::error::{ChainParamsError, GenesisField};

/// Headline embedded in the genesis coinbase.
pub const GENESIS_MESSAGE: &str =
    "Bitcoin: Another Correction Stage is Over | Dmitriy Gurkovskiy | March 3, 2021 | The-Merkle";

/// Arbitrary height marker pushed ahead of the message.
const COINBASE_MARKER: i64 = 42;

pub const MAIN_GENESIS_TIME: u32 = 1_615_521_906;
pub const TESTNET_GENESIS_TIME: u32 = MAIN_GENESIS_TIME + 30;
pub const REGTEST_GENESIS_TIME: u32 = MAIN_GENESIS_TIME + 90;

pub const MAIN_GENESIS_NONCE: u32 = 31_253;
pub const TESTNET_GENESIS_NONCE: u32 = 830;
pub const REGTEST_GENESIS_NONCE: u32 = 8;

/// Shared by all three networks: they differ only in header fields.
pub const GENESIS_MERKLE_ROOT: &str =
    "2a960293f70089c00d30a579d7907f0c9cfcaf26ad1d64697b0f9cf074bd0306";

pub const MAIN_GENESIS_HASH: &str =
    "0000c38262f0dab80fa39db4e49ec56ab70f3b3c042b936e0d858076f2512442";
pub const TESTNET_GENESIS_HASH: &str =
    "000744f6b8ff32dc25e767a2442cf50fd2412fb9c602e25dc8d4fb4320a83177";
pub const REGTEST_GENESIS_HASH: &str =
    "252b478118de5f014441146dd6df0f543ae75960b60161c4daee476ec1104397";

/// Serialized genesis headers with the digests the network assigned them.
///
/// Stands in for the network's proof-of-work digest, which lives in the
/// consensus engine. The digests are recorded independently of the
/// expected hashes above: a change to either side alone fails verification.
const GENESIS_HEADER_CHECKPOINTS: [(&str, &str); 3] = [
    (
        "01000000000000000000000000000000000000000000000000000000000000000000000006\
         03bd74f09c0f7b69641dad26affc9c0c7f90d779a5300dc08900f79302962a72e84a60ffff\
         001f157a0000",
        "0000c38262f0dab80fa39db4e49ec56ab70f3b3c042b936e0d858076f2512442",
    ),
    (
        "01000000000000000000000000000000000000000000000000000000000000000000000006\
         03bd74f09c0f7b69641dad26affc9c0c7f90d779a5300dc08900f79302962a90e84a60ffff\
         0f1f3e030000",
        "000744f6b8ff32dc25e767a2442cf50fd2412fb9c602e25dc8d4fb4320a83177",
    ),
    (
        "01000000000000000000000000000000000000000000000000000000000000000000000006\
         03bd74f09c0f7b69641dad26affc9c0c7f90d779a5300dc08900f79302962acce84a60ffff\
         7f2008000000",
        "252b478118de5f014441146dd6df0f543ae75960b60161c4daee476ec1104397",
    ),
];

/// What the single coinbase output pays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenesisOutput {
    /// Zero value, empty script. Unspendable by construction.
    Empty,
    Reward(Amount),
}

/// Everything needed to rebuild a genesis block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Timestamp of the coinbase transaction.
    pub tx_time: u32,
    /// Timestamp of the block header.
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub message: &'static str,
    pub output: GenesisOutput,
}

/// The identity a rebuilt genesis block must reproduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisExpectation {
    pub hash: &'static str,
    pub merkle_root: &'static str,
}

/// Build the genesis block described by `spec`.
pub fn build_genesis(spec: &GenesisSpec) -> Block {
    let script_sig = Script::new()
        .push_int(0)
        .push_num(COINBASE_MARKER)
        .push_slice(spec.message.as_bytes());

    let output = match spec.output {
        GenesisOutput::Empty => TxOut::empty(),
        GenesisOutput::Reward(value) => TxOut {
            value,
            script_pubkey: Script::new(),
        },
    };

    let coinbase = Transaction {
        version: 1,
        time: spec.tx_time,
        inputs: vec![TxIn::coinbase(script_sig)],
        outputs: vec![output],
        lock_time: 0,
    };

    let transactions = vec![coinbase];
    let header = BlockHeader {
        version: 1,
        prev_block: Hash256::ZERO,
        merkle_root: merkle_root(&transactions),
        time: spec.time,
        bits: spec.bits,
        nonce: spec.nonce,
    };

    Block {
        header,
        transactions,
    }
}

/// Check a rebuilt genesis block against its frozen identity.
///
/// Returns the verified block hash. Any mismatch is fatal for startup.
pub fn verify_genesis(
    network: Network,
    block: &Block,
    expected: &GenesisExpectation,
    hasher: &dyn PowHasher,
) -> Result<Hash256, ChainParamsError> {
    let expected_hash = parse_hash("genesis hash", expected.hash)?;
    let expected_root = parse_hash("genesis merkle root", expected.merkle_root)?;

    let hash = hasher.hash_header(&block.header);
    check(network, GenesisField::Hash, expected_hash, hash)?;
    check(
        network,
        GenesisField::MerkleRoot,
        expected_root,
        block.header.merkle_root,
    )?;

    debug!(%network, %hash, hasher = hasher.name(), "genesis block verified");
    Ok(hash)
}

/// Header digest for the deployed networks: the three frozen genesis
/// headers answer with their assigned hashes, anything else is double SHA-256.
pub fn genesis_checkpoint_hasher() -> Result<CheckpointHasher<Sha256dHasher>, ChainParamsError> {
    let mut hasher = CheckpointHasher::new(Sha256dHasher);
    for (preimage, hash) in GENESIS_HEADER_CHECKPOINTS {
        hasher = hasher.with_checkpoint(preimage, hash)?;
    }
    Ok(hasher)
}

fn check(
    network: Network,
    field: GenesisField,
    expected: Hash256,
    actual: Hash256,
) -> Result<(), ChainParamsError> {
    if expected == actual {
        return Ok(());
    }
    error!(%network, %field, %expected, %actual, "genesis identity mismatch");
    Err(ChainParamsError::GenesisMismatch {
        network,
        field,
        expected,
        actual,
    })
}

fn parse_hash(what: &'static str, hex: &str) -> Result<Hash256, ChainParamsError> {
    Hash256::from_hex(hex).map_err(|e| ChainParamsError::InvalidLiteral {
        what,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rev_types::Encodable;

    fn main_spec() -> GenesisSpec {
        GenesisSpec {
            tx_time: MAIN_GENESIS_TIME,
            time: MAIN_GENESIS_TIME,
            bits: 0x1f00_ffff,
            nonce: MAIN_GENESIS_NONCE,
            message: GENESIS_MESSAGE,
            output: GenesisOutput::Empty,
        }
    }

    #[test]
    fn coinbase_script_layout() {
        let block = build_genesis(&main_spec());
        let script = block.transactions[0].inputs[0].script_sig.as_bytes();
        assert_eq!(&script[..5], &[0x00, 0x01, 0x2a, 0x4c, 91]);
        assert_eq!(&script[5..], GENESIS_MESSAGE.as_bytes());
    }

    #[test]
    fn merkle_root_reproduces_with_double_sha256() {
        let block = build_genesis(&main_spec());
        assert_eq!(
            block.header.merkle_root.to_hex(),
            "2a960293f70089c00d30a579d7907f0c9cfcaf26ad1d64697b0f9cf074bd0306"
        );
        assert!(block.is_genesis_shaped());
    }

    #[test]
    fn header_fields() {
        let header = build_genesis(&main_spec()).header;
        assert_eq!(header.version, 1);
        assert!(header.prev_block.is_zero());
        assert_eq!(header.time, 1_615_521_906);
        assert_eq!(header.nonce, 31_253);
        assert_eq!(header.bits, 0x1f00_ffff);
    }

    #[test]
    fn main_header_matches_checkpoint_preimage() {
        let header = build_genesis(&main_spec()).header;
        let preimage: String = GENESIS_HEADER_CHECKPOINTS[0].0.to_string();
        assert_eq!(hex::encode(header.to_bytes()), preimage);
    }

    #[test]
    fn reward_output_changes_merkle_root() {
        let mut spec = main_spec();
        spec.output = GenesisOutput::Reward(rev_types::COIN);
        let block = build_genesis(&spec);
        assert_ne!(block.header.merkle_root.to_hex(), GENESIS_MERKLE_ROOT);
        assert_eq!(block.transactions[0].outputs[0].value, rev_types::COIN);
    }

    #[test]
    fn verify_accepts_frozen_identity() {
        let hasher = genesis_checkpoint_hasher().unwrap();
        let block = build_genesis(&main_spec());
        let expected = GenesisExpectation {
            hash: MAIN_GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        };
        let hash = verify_genesis(Network::Main, &block, &expected, &hasher).unwrap();
        assert_eq!(hash.to_hex(), MAIN_GENESIS_HASH);
    }

    #[test]
    fn verify_rejects_edited_nonce() {
        let hasher = genesis_checkpoint_hasher().unwrap();
        let mut spec = main_spec();
        spec.nonce += 1;
        let block = build_genesis(&spec);
        let expected = GenesisExpectation {
            hash: MAIN_GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        };
        let err = verify_genesis(Network::Main, &block, &expected, &hasher).unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::GenesisMismatch {
                network: Network::Main,
                field: GenesisField::Hash,
                ..
            }
        ));
    }

    #[test]
    fn verify_rejects_edited_message_by_merkle_root() {
        // Hash check passes through a hasher that always agrees, so the
        // Merkle root is what catches the edit.
        struct Agreeable;
        impl PowHasher for Agreeable {
            fn hash_header(&self, _header: &BlockHeader) -> Hash256 {
                Hash256::from_hex(MAIN_GENESIS_HASH).unwrap()
            }
            fn name(&self) -> &str {
                "agreeable"
            }
        }

        let mut spec = main_spec();
        spec.message = "edited";
        let block = build_genesis(&spec);
        let expected = GenesisExpectation {
            hash: MAIN_GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        };
        let err = verify_genesis(Network::Main, &block, &expected, &Agreeable).unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::GenesisMismatch {
                field: GenesisField::MerkleRoot,
                ..
            }
        ));
    }

    #[test]
    fn edited_expected_hash_is_rejected() {
        let hasher = genesis_checkpoint_hasher().unwrap();
        let block = build_genesis(&main_spec());
        let expected = GenesisExpectation {
            hash: "1111c38262f0dab80fa39db4e49ec56ab70f3b3c042b936e0d858076f2512442",
            merkle_root: GENESIS_MERKLE_ROOT,
        };
        let err = verify_genesis(Network::Main, &block, &expected, &hasher).unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::GenesisMismatch {
                field: GenesisField::Hash,
                ..
            }
        ));
    }

    #[test]
    fn checkpoints_agree_with_frozen_hashes() {
        let recorded: Vec<&str> = GENESIS_HEADER_CHECKPOINTS.iter().map(|(_, h)| *h).collect();
        assert_eq!(
            recorded,
            vec![MAIN_GENESIS_HASH, TESTNET_GENESIS_HASH, REGTEST_GENESIS_HASH]
        );
        assert_eq!(
            MAIN_GENESIS_HASH,
            "0000c38262f0dab80fa39db4e49ec56ab70f3b3c042b936e0d858076f2512442"
        );
        assert_eq!(
            TESTNET_GENESIS_HASH,
            "000744f6b8ff32dc25e767a2442cf50fd2412fb9c602e25dc8d4fb4320a83177"
        );
        assert_eq!(
            REGTEST_GENESIS_HASH,
            "252b478118de5f014441146dd6df0f543ae75960b60161c4daee476ec1104397"
        );
    }

    #[test]
    fn plain_sha256d_does_not_reproduce_the_network_hash() {
        let block = build_genesis(&main_spec());
        let expected = GenesisExpectation {
            hash: MAIN_GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        };
        assert!(verify_genesis(Network::Main, &block, &expected, &Sha256dHasher).is_err());
    }

    #[test]
    fn malformed_expectation_is_reported() {
        let block = build_genesis(&main_spec());
        let expected = GenesisExpectation {
            hash: "not-hex",
            merkle_root: GENESIS_MERKLE_ROOT,
        };
        let err = verify_genesis(Network::Main, &block, &expected, &Sha256dHasher).unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::InvalidLiteral {
                what: "genesis hash",
                ..
            }
        ));
    }
}
