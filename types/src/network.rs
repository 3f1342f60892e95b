//! Network identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Identifies which Rev network a node runs on.
///
/// The set is closed: every process lives on exactly one of these for its
/// whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network.
    Main,
    /// The public test network.
    TestNet,
    /// Local regression-test network.
    RegTest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::TestNet, Network::RegTest];

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::TestNet => "test",
            Self::RegTest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Self::Main),
            "test" | "testnet" => Ok(Self::TestNet),
            "regtest" => Ok(Self::RegTest),
            _ => Err(TypesError::UnsupportedNetwork(s.to_string())),
        }
    }
}

/// Numeric ids follow the order of the variants (0 = main).
impl TryFrom<u8> for Network {
    type Error = TypesError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| TypesError::UnsupportedNetwork(id.to_string()))
    }
}
