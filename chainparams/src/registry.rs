//! The set of network parameters and which one is active.

use rev_crypto::PowHasher;
use rev_types::{Clock, Network, RandomSource, RngSource, SystemClock};
use tracing::info;

use crate::error::ChainParamsError;
use crate::genesis::genesis_checkpoint_hasher;
use crate::networks::{main_params, regtest_params, testnet_params};
use crate::params::NetworkParameters;

/// Holds the parameters of all three networks and the active selection.
///
/// All three records are built and verified together by [`build`], before
/// anything else starts. The active network defaults to [`Network::Main`]
/// and is chosen once during startup with [`select`]. `select` takes
/// `&mut self`, so it cannot run while any consumer holds a shared borrow;
/// once startup hands out `&ChainParamsRegistry` (or an `Arc`) the selection
/// is frozen.
///
/// [`build`]: ChainParamsRegistry::build
/// [`select`]: ChainParamsRegistry::select
#[derive(Debug)]
pub struct ChainParamsRegistry {
    main: NetworkParameters,
    testnet: NetworkParameters,
    regtest: NetworkParameters,
    current: Network,
}

impl ChainParamsRegistry {
    /// Build and verify every network. Fails on the first genesis mismatch.
    pub fn build(
        hasher: &dyn PowHasher,
        clock: &dyn Clock,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, ChainParamsError> {
        let main = main_params(hasher, clock, rng)?;
        let testnet = testnet_params(&main, hasher)?;
        let regtest = regtest_params(&testnet, hasher)?;

        info!(
            main = %main.genesis_hash(),
            testnet = %testnet.genesis_hash(),
            regtest = %regtest.genesis_hash(),
            "chain parameters verified"
        );

        Ok(Self {
            main,
            testnet,
            regtest,
            current: Network::Main,
        })
    }

    /// Build with the frozen genesis checkpoints, the wall clock and the
    /// thread-local generator.
    pub fn build_default() -> Result<Self, ChainParamsError> {
        let hasher = genesis_checkpoint_hasher()?;
        Self::build(&hasher, &SystemClock, &mut RngSource::thread())
    }

    /// Parameters of the active network.
    pub fn current(&self) -> &NetworkParameters {
        self.get(self.current)
    }

    pub fn current_network(&self) -> Network {
        self.current
    }

    pub fn get(&self, network: Network) -> &NetworkParameters {
        match network {
            Network::Main => &self.main,
            Network::TestNet => &self.testnet,
            Network::RegTest => &self.regtest,
        }
    }

    /// Make `network` the active network. Selecting the active network
    /// again is a no-op.
    pub fn select(&mut self, network: Network) {
        if self.current == network {
            return;
        }
        info!(from = %self.current, to = %network, "network selected");
        self.current = network;
    }

    /// Select by an untyped tag such as `"test"` or `"regtest"`.
    pub fn select_by_name(&mut self, name: &str) -> Result<Network, ChainParamsError> {
        let network: Network = name.parse()?;
        self.select(network);
        Ok(network)
    }

    /// Select by the numeric network id used on the wire and in storage.
    pub fn select_by_id(&mut self, id: u8) -> Result<Network, ChainParamsError> {
        let network = Network::try_from(id)?;
        self.select(network);
        Ok(network)
    }

    /// All records, Main first.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkParameters> {
        Network::ALL.into_iter().map(move |network| self.get(network))
    }
}
