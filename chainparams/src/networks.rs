//! Builders for the three Rev networks.
//!
//! Main is built from scratch. TestNet starts from a copy of Main and
//! RegTest from a copy of TestNet; each then overrides what differs and
//! rebuilds and re-verifies its own genesis block.

use rev_crypto::PowHasher;
use rev_types::{Block, Clock, Hash256, Network, PowLimit, RandomSource};
use tracing::debug;

use crate::base58::Base58Prefixes;
use crate::error::ChainParamsError;
use crate::genesis::{
    build_genesis, verify_genesis, GenesisExpectation, GenesisOutput, GenesisSpec,
    GENESIS_MERKLE_ROOT, GENESIS_MESSAGE, MAIN_GENESIS_HASH, MAIN_GENESIS_NONCE,
    MAIN_GENESIS_TIME, REGTEST_GENESIS_HASH, REGTEST_GENESIS_NONCE, REGTEST_GENESIS_TIME,
    TESTNET_GENESIS_HASH, TESTNET_GENESIS_NONCE, TESTNET_GENESIS_TIME,
};
use crate::params::NetworkParameters;
use crate::seeds::{convert_seeds, MAIN_SEEDS};

const MAIN_ALERT_KEY: &str = "03acef5aa489f996be6b659c91a56897eba2efaacb6a192acdbef7894452f81f\
                              85d131aadfef3be6145678454852a2d08c6314bba5ca3cbe5616262da3b1a6aaac";
const TESTNET_ALERT_KEY: &str = "04acef5aa489f996be6b659c91a56897eba2efaacb6a192acdbef7894452f81f\
                                 85d131aadfef3be6145678454852a2d08c6314bba5ca3cbe5616262da3b1a6aaab";

const MN_ENGINE_POOL_ADDRESS: &str = "R9mMvKeFsoYzwoBPxZZrJkkADLC2roajj1";
const DEV_OPS_ADDRESS: &str = "RMeDKCxgsjPXS7DDkA2BKdK3mSQDFyZ2Bo";

/// Production network parameters.
pub fn main_params(
    hasher: &dyn PowHasher,
    clock: &dyn Clock,
    rng: &mut dyn RandomSource,
) -> Result<NetworkParameters, ChainParamsError> {
    let pow_limit = PowLimit::leading_zero_bits(16);
    let (genesis_block, genesis_hash) = verified_genesis(
        Network::Main,
        MAIN_GENESIS_TIME,
        pow_limit,
        MAIN_GENESIS_NONCE,
        MAIN_GENESIS_HASH,
        hasher,
    )?;

    let params = NetworkParameters {
        network: Network::Main,
        message_start: [0xbb, 0x9e, 0xef, 0xa2],
        alert_public_key: decode_hex("main alert key", MAIN_ALERT_KEY)?,
        default_port: 21061,
        rpc_port: 21062,
        pow_limit,
        pos_limit: PowLimit::leading_zero_bits(18),
        genesis_block,
        genesis_hash,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![60],
            script_address: vec![48],
            secret_key: vec![75],
            stealth_address: vec![58],
            ext_public_key: vec![0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: vec![0x04, 0x88, 0xad, 0xe4],
        },
        fixed_seeds: convert_seeds(MAIN_SEEDS, clock, rng),
        dns_seeds: Vec::new(),
        pool_max_transactions: 9,
        dev_ops_address: DEV_OPS_ADDRESS.to_string(),
        mn_engine_pool_address: MN_ENGINE_POOL_ADDRESS.to_string(),
        end_pow_block_height: i32::MAX,
        start_pos_block_height: 1,
        require_rpc_password: true,
        data_dir_suffix: String::new(),
    };

    debug!(network = %params.network, seeds = params.fixed_seeds.len(), "network parameters built");
    Ok(params)
}

/// Public test network parameters, derived from `main`.
pub fn testnet_params(
    main: &NetworkParameters,
    hasher: &dyn PowHasher,
) -> Result<NetworkParameters, ChainParamsError> {
    let mut params = main.clone();
    params.network = Network::TestNet;
    params.data_dir_suffix = "testnet".to_string();
    params.message_start = [0xaa, 0x8e, 0xaf, 0xb2];
    params.alert_public_key = decode_hex("testnet alert key", TESTNET_ALERT_KEY)?;
    params.pow_limit = PowLimit::leading_zero_bits(12);
    params.pos_limit = PowLimit::leading_zero_bits(14);
    params.default_port = 21065;
    params.rpc_port = 21066;
    params.end_pow_block_height = i32::MAX;

    let (genesis_block, genesis_hash) = verified_genesis(
        Network::TestNet,
        TESTNET_GENESIS_TIME,
        params.pow_limit,
        TESTNET_GENESIS_NONCE,
        TESTNET_GENESIS_HASH,
        hasher,
    )?;
    params.genesis_block = genesis_block;
    params.genesis_hash = genesis_hash;

    params.fixed_seeds.clear();
    params.dns_seeds.clear();

    params.base58_prefixes = Base58Prefixes {
        pubkey_address: vec![61],
        script_address: vec![82],
        secret_key: vec![63],
        stealth_address: vec![43],
        ext_public_key: vec![0x04, 0x35, 0x87, 0xcf],
        ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
    };

    debug!(network = %params.network, "network parameters built");
    Ok(params)
}

/// Regression-test network parameters, derived from `testnet`.
pub fn regtest_params(
    testnet: &NetworkParameters,
    hasher: &dyn PowHasher,
) -> Result<NetworkParameters, ChainParamsError> {
    let mut params = testnet.clone();
    params.network = Network::RegTest;
    params.message_start = [0x22, 0x9a, 0x99, 0x19];
    params.pow_limit = PowLimit::leading_zero_bits(1);

    let (genesis_block, genesis_hash) = verified_genesis(
        Network::RegTest,
        REGTEST_GENESIS_TIME,
        params.pow_limit,
        REGTEST_GENESIS_NONCE,
        REGTEST_GENESIS_HASH,
        hasher,
    )?;
    params.genesis_block = genesis_block;
    params.genesis_hash = genesis_hash;

    params.default_port = 21067;
    params.data_dir_suffix = "regtest".to_string();
    params.require_rpc_password = false;
    params.dns_seeds.clear();

    debug!(network = %params.network, "network parameters built");
    Ok(params)
}

/// The genesis recipe shared by every network; only the header differs.
pub fn genesis_spec(time: u32, pow_limit: PowLimit, nonce: u32) -> GenesisSpec {
    GenesisSpec {
        tx_time: MAIN_GENESIS_TIME,
        time,
        bits: pow_limit.to_compact(),
        nonce,
        message: GENESIS_MESSAGE,
        output: GenesisOutput::Empty,
    }
}

fn verified_genesis(
    network: Network,
    time: u32,
    pow_limit: PowLimit,
    nonce: u32,
    expected_hash: &'static str,
    hasher: &dyn PowHasher,
) -> Result<(Block, Hash256), ChainParamsError> {
    let block = build_genesis(&genesis_spec(time, pow_limit, nonce));
    let expected = GenesisExpectation {
        hash: expected_hash,
        merkle_root: GENESIS_MERKLE_ROOT,
    };
    let hash = verify_genesis(network, &block, &expected, hasher)?;
    Ok((block, hash))
}

fn decode_hex(what: &'static str, literal: &str) -> Result<Vec<u8>, ChainParamsError> {
    hex::decode(literal).map_err(|e| ChainParamsError::InvalidLiteral {
        what,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::genesis_checkpoint_hasher;
    use crate::error::GenesisField;
    use rev_crypto::Sha256dHasher;
    use rev_nullables::{NullClock, NullRandom};

    fn main() -> NetworkParameters {
        let hasher = genesis_checkpoint_hasher().unwrap();
        let clock = NullClock::new(1_700_000_000);
        let mut rng = NullRandom::constant(0);
        main_params(&hasher, &clock, &mut rng).unwrap()
    }

    #[test]
    fn alert_keys_are_uncompressed_length() {
        let main = main();
        assert_eq!(main.alert_public_key().len(), 65);
        let hasher = genesis_checkpoint_hasher().unwrap();
        let testnet = testnet_params(&main, &hasher).unwrap();
        assert_eq!(testnet.alert_public_key().len(), 65);
        assert_ne!(testnet.alert_public_key(), main.alert_public_key());
    }

    #[test]
    fn testnet_overrides_and_inherits() {
        let main = main();
        let hasher = genesis_checkpoint_hasher().unwrap();
        let testnet = testnet_params(&main, &hasher).unwrap();
        assert_eq!(testnet.network(), Network::TestNet);
        assert_eq!(testnet.pool_max_transactions(), main.pool_max_transactions());
        assert_eq!(testnet.dev_ops_address(), main.dev_ops_address());
        assert_eq!(testnet.start_pos_block_height(), 1);
        assert!(testnet.require_rpc_password());
        assert_ne!(testnet.genesis_hash(), main.genesis_hash());
    }

    #[test]
    fn regtest_inherits_testnet_prefixes_and_rpc_port() {
        let hasher = genesis_checkpoint_hasher().unwrap();
        let testnet = testnet_params(&main(), &hasher).unwrap();
        let regtest = regtest_params(&testnet, &hasher).unwrap();
        assert_eq!(regtest.base58_prefixes(), testnet.base58_prefixes());
        assert_eq!(regtest.rpc_port(), 21066);
        assert_eq!(regtest.pos_limit(), testnet.pos_limit());
        assert_eq!(regtest.alert_public_key(), testnet.alert_public_key());
    }

    #[test]
    fn main_fails_without_the_network_header_digest() {
        let clock = NullClock::new(1_700_000_000);
        let mut rng = NullRandom::constant(0);
        let err = main_params(&Sha256dHasher, &clock, &mut rng).unwrap_err();
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
    fn testnet_cannot_reuse_main_genesis() {
        // A hasher that only knows the main header must reject the testnet build.
        let main = main();
        let hasher = rev_crypto::CheckpointHasher::new(Sha256dHasher)
            .with_checkpoint(
                &hex::encode(main.genesis_block().header.preimage()),
                MAIN_GENESIS_HASH,
            )
            .unwrap();
        assert!(testnet_params(&main, &hasher).is_err());
    }
}
