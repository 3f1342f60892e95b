//! Chain parameters: the trusted, per-network configuration of a Rev node.
//!
//! Every network (Main, TestNet, RegTest) is described by one immutable
//! [`NetworkParameters`] record whose genesis block is rebuilt and verified
//! at startup. Nothing downstream may run until that verification passes.
//!
//! ## Module overview
//!
//! - [`genesis`] — Genesis block recipe, builder and identity check.
//! - [`seeds`] — Compiled-in bootstrap peers and their expansion.
//! - [`params`] — The per-network record.
//! - [`networks`] — Builders for the three networks.
//! - [`base58`] — Address version prefixes.
//! - [`registry`] — All three records plus the active selection.
//! - [`selector`] — Startup flags to active network.
//! - [`consensus`] — Shared consensus constants.
//! - [`error`] — Chain parameter errors.

pub mod base58;
pub mod consensus;
pub mod error;
pub mod genesis;
pub mod networks;
pub mod params;
pub mod registry;
pub mod seeds;
pub mod selector;

pub use base58::{Base58Prefixes, Base58Type};
pub use error::{ChainParamsError, GenesisField};
pub use genesis::{build_genesis, genesis_checkpoint_hasher, verify_genesis, GenesisSpec};
pub use params::NetworkParameters;
pub use registry::ChainParamsRegistry;
pub use seeds::{convert_seeds, DnsSeed, SeedSpec6};
pub use selector::{select_network, NetworkFlags};
