//! Bootstrap peers.
//!
//! Fixed seeds are compiled in as raw 16-byte addresses. When they are
//! expanded into [`PeerAddress`] records each one is given a "last seen" time
//! between one and two weeks in the past, so any peer learned from the
//! network looks fresher than a seed.

use rev_types::{Clock, PeerAddress, RandomSource};
use serde::Serialize;

pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// A compiled-in seed: IPv6 (or IPv4-mapped) address and port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// An IPv4 seed stored in its IPv4-mapped form.
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let [a, b, c, d] = octets;
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }
}

/// A DNS seed, consumed by the peer-discovery layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

/// Main network fixed seeds. No seed nodes are published yet.
pub const MAIN_SEEDS: &[SeedSpec6] = &[];

/// Expand a seed table into peer addresses with stale "last seen" times.
pub fn convert_seeds(
    table: &[SeedSpec6],
    clock: &dyn Clock,
    rng: &mut dyn RandomSource,
) -> Vec<PeerAddress> {
    let now = clock.now();
    table
        .iter()
        .map(|seed| {
            let mut peer = PeerAddress::new(seed.addr, seed.port);
            let age = ONE_WEEK + rng.below(ONE_WEEK + 1);
            peer.last_seen = now.saturating_sub_secs(age);
            peer
        })
        .collect()
}
