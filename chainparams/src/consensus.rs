//! Consensus constants shared by every network.
//!
//! These are read by block validation and staking, which live outside this
//! crate. Times are in seconds, maturities in blocks.

use rev_types::{Amount, COIN};

/// Minimum coin age before an output may stake.
pub const STAKE_MIN_AGE: u32 = 0;

/// Time between stake modifier recomputations.
pub const MODIFIER_INTERVAL: u32 = 2 * 60;

pub const GENESIS_BLOCK_REWARD: Amount = Amount::new(COIN.units());

/// Premine paid out by the reserve block.
pub const BLOCK_REWARD_RESERVE: Amount = Amount::new(22_000_000 * COIN.units());

pub const BLOCK_STANDARD_REWARD: Amount = Amount::ZERO;

pub const BLOCK_SPACING: i64 = 2 * 60;
pub const BLOCK_SPACING_MIN: i64 = 45;
pub const BLOCK_SPACING_MAX: i64 = 3 * 60;
pub const TARGET_SPACING: i64 = BLOCK_SPACING;

pub const MN_ENGINE_COLLATERAL: Amount = Amount::new(COIN.units());
pub const MN_ENGINE_POOL_MAX: Amount = Amount::new(999 * COIN.units());

/// Confirmations before a coinbase output may stake.
pub const STAKE_MIN_CONFIRMATIONS: u32 = 30;
pub const TRANSACTION_MATURITY: u32 = 6;
pub const COINBASE_MATURITY: u32 = 30;

/// Masternode collateral in whole coins at `height`. Flat for now.
pub fn masternode_collateral(_height: i32) -> i64 {
    50_000
}
