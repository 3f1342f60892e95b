//! Fundamental types for the Rev node.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! hashes, difficulty targets, the block and transaction model, peer addresses,
//! network identifiers, amounts and timestamps.

pub mod amount;
pub mod block;
pub mod encode;
pub mod error;
pub mod hash;
pub mod network;
pub mod peer;
pub mod random;
pub mod script;
pub mod target;
pub mod time;
pub mod transaction;

pub use amount::{Amount, COIN};
pub use block::{Block, BlockHeader};
pub use encode::Encodable;
pub use error::TypesError;
pub use hash::Hash256;
pub use network::Network;
pub use peer::PeerAddress;
pub use random::{RandomSource, RngSource};
pub use script::Script;
pub use target::PowLimit;
pub use time::{Clock, SystemClock, Timestamp};
pub use transaction::{OutPoint, Transaction, TxIn, TxOut};
