//! The per-network parameter record.

use rev_types::{Block, Hash256, Network, PeerAddress, PowLimit};
use serde::{Serialize, Serializer};

use crate::base58::{Base58Prefixes, Base58Type};
use crate::seeds::DnsSeed;

/// Everything that distinguishes one Rev network from another.
///
/// Instances are only produced by the network builders, which verify the
/// genesis block before handing one out. Fields are read through accessors;
/// nothing outside this crate can mutate a record.
#[derive(Clone, Debug, Serialize)]
pub struct NetworkParameters {
    pub(crate) network: Network,
    #[serde(serialize_with = "as_hex")]
    pub(crate) message_start: [u8; 4],
    #[serde(serialize_with = "as_hex")]
    pub(crate) alert_public_key: Vec<u8>,
    pub(crate) default_port: u16,
    pub(crate) rpc_port: u16,
    pub(crate) pow_limit: PowLimit,
    pub(crate) pos_limit: PowLimit,
    pub(crate) genesis_block: Block,
    pub(crate) genesis_hash: Hash256,
    pub(crate) base58_prefixes: Base58Prefixes,
    pub(crate) fixed_seeds: Vec<PeerAddress>,
    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) pool_max_transactions: u32,
    pub(crate) dev_ops_address: String,
    pub(crate) mn_engine_pool_address: String,
    pub(crate) end_pow_block_height: i32,
    pub(crate) start_pos_block_height: i32,
    pub(crate) require_rpc_password: bool,
    pub(crate) data_dir_suffix: String,
}

impl NetworkParameters {
    pub fn network(&self) -> Network {
        self.network
    }

    /// Bytes that open every wire message on this network.
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn alert_public_key(&self) -> &[u8] {
        &self.alert_public_key
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn pow_limit(&self) -> PowLimit {
        self.pow_limit
    }

    pub fn pos_limit(&self) -> PowLimit {
        self.pos_limit
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis_hash
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    pub fn dev_ops_address(&self) -> &str {
        &self.dev_ops_address
    }

    pub fn mn_engine_pool_address(&self) -> &str {
        &self.mn_engine_pool_address
    }

    /// Last height at which proof-of-work blocks are accepted.
    pub fn end_pow_block_height(&self) -> i32 {
        self.end_pow_block_height
    }

    /// First height at which proof-of-stake blocks are accepted.
    pub fn start_pos_block_height(&self) -> i32 {
        self.start_pos_block_height
    }

    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    /// Subdirectory of the data directory for this network; empty on main.
    pub fn data_dir_suffix(&self) -> &str {
        &self.data_dir_suffix
    }
}

fn as_hex<S: Serializer, T: AsRef<[u8]>>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
