use proptest::prelude::*;

use rev_chainparams::genesis::{GENESIS_MERKLE_ROOT, MAIN_GENESIS_HASH, MAIN_GENESIS_TIME};
use rev_chainparams::networks::genesis_spec;
use rev_chainparams::seeds::ONE_WEEK;
use rev_chainparams::{
    build_genesis, convert_seeds, genesis_checkpoint_hasher, select_network, verify_genesis,
    ChainParamsRegistry, NetworkFlags, SeedSpec6,
};
use rev_nullables::{NullClock, NullRandom};
use rev_types::{Network, PowLimit, RngSource, Timestamp};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seed_table(len: usize) -> Vec<SeedSpec6> {
    (0..len)
        .map(|i| SeedSpec6::ipv4([10, 0, (i >> 8) as u8, i as u8], 21061))
        .collect()
}

proptest! {
    /// Every converted seed lands inside [now - 2 weeks, now - 1 week].
    #[test]
    fn seed_ages_stay_in_window(
        now in (2 * ONE_WEEK)..4_000_000_000u64,
        len in 0usize..64,
        seed in any::<u64>(),
    ) {
        let clock = NullClock::new(now);
        let mut rng = RngSource(StdRng::seed_from_u64(seed));
        let peers = convert_seeds(&seed_table(len), &clock, &mut rng);

        prop_assert_eq!(peers.len(), len);
        for peer in &peers {
            prop_assert!(peer.last_seen >= Timestamp::new(now - 2 * ONE_WEEK));
            prop_assert!(peer.last_seen <= Timestamp::new(now - ONE_WEEK));
        }
    }

    /// Scripted draws map one-to-one onto ages.
    #[test]
    fn seed_age_follows_draw(draw in 0u64..=ONE_WEEK) {
        let now = 1_700_000_000;
        let clock = NullClock::new(now);
        let mut rng = NullRandom::constant(draw);
        let peers = convert_seeds(&seed_table(1), &clock, &mut rng);
        prop_assert_eq!(peers[0].last_seen, Timestamp::new(now - ONE_WEEK - draw));
    }

    /// Any nonce other than the frozen one breaks the main genesis.
    #[test]
    fn wrong_nonce_never_verifies(nonce in any::<u32>()) {
        prop_assume!(nonce != 31_253);
        let hasher = genesis_checkpoint_hasher().unwrap();
        let block = build_genesis(&genesis_spec(
            MAIN_GENESIS_TIME,
            PowLimit::leading_zero_bits(16),
            nonce,
        ));
        let expected = rev_chainparams::genesis::GenesisExpectation {
            hash: MAIN_GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        };
        prop_assert!(verify_genesis(Network::Main, &block, &expected, &hasher).is_err());
    }

    /// The header never feeds into the coinbase, so the Merkle root is fixed.
    #[test]
    fn merkle_root_ignores_header_fields(time in any::<u32>(), nonce in any::<u32>(), shift in 1usize..32) {
        let block = build_genesis(&genesis_spec(time, PowLimit::leading_zero_bits(shift), nonce));
        prop_assert_eq!(block.header.merkle_root.to_hex(), GENESIS_MERKLE_ROOT);
    }
}

#[test]
fn selector_outcome_matches_flags_from_any_start() {
    let hasher = genesis_checkpoint_hasher().unwrap();
    let clock = NullClock::new(1_700_000_000);
    let mut rng = NullRandom::constant(0);

    for start in Network::ALL {
        for (testnet, regtest) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut registry = ChainParamsRegistry::build(&hasher, &clock, &mut rng).unwrap();
            registry.select(start);
            let result = select_network(&mut registry, NetworkFlags { testnet, regtest });
            match result {
                Ok(network) => assert_eq!(registry.current_network(), network),
                Err(_) => assert_eq!(registry.current_network(), start),
            }
        }
    }
}
