//! Startup network selection from command-line intent.

use rev_types::Network;
use tracing::warn;

use crate::error::ChainParamsError;
use crate::registry::ChainParamsRegistry;

/// Already-resolved network flags from the configuration layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkFlags {
    pub testnet: bool,
    pub regtest: bool,
}

impl NetworkFlags {
    /// The network these flags ask for.
    pub fn network(&self) -> Result<Network, ChainParamsError> {
        match (self.testnet, self.regtest) {
            (true, true) => Err(ChainParamsError::ConflictingNetworkSelection),
            (_, true) => Ok(Network::RegTest),
            (true, false) => Ok(Network::TestNet),
            (false, false) => Ok(Network::Main),
        }
    }
}

/// Resolve `flags` and install the result as the active network.
///
/// On conflicting flags nothing is selected and the registry keeps its
/// current network.
pub fn select_network(
    registry: &mut ChainParamsRegistry,
    flags: NetworkFlags,
) -> Result<Network, ChainParamsError> {
    let network = flags.network().inspect_err(|_| {
        warn!(?flags, "refusing conflicting network selection");
    })?;
    registry.select(network);
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_table() {
        let cases = [
            (false, false, Some(Network::Main)),
            (true, false, Some(Network::TestNet)),
            (false, true, Some(Network::RegTest)),
            (true, true, None),
        ];
        for (testnet, regtest, expected) in cases {
            let flags = NetworkFlags { testnet, regtest };
            assert_eq!(flags.network().ok(), expected, "{flags:?}");
        }
    }

    #[test]
    fn default_flags_mean_main() {
        assert_eq!(NetworkFlags::default().network().unwrap(), Network::Main);
    }
}
