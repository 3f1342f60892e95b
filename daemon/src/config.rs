//! Daemon configuration with TOML file support.

use rev_chainparams::NetworkFlags;
use rev_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Startup configuration for a Rev daemon.
///
/// Loaded from a TOML file via [`DaemonConfig::from_toml_file`]; command-line
/// flags are layered on top in `main`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Run on the public test network.
    #[serde(default)]
    pub testnet: bool,

    /// Run on the local regression-test network.
    #[serde(default)]
    pub regtest: bool,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Base data directory; each network uses its own subdirectory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./rev_data")
}

impl DaemonConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The network intent to hand to the selector.
    pub fn network_flags(&self) -> NetworkFlags {
        NetworkFlags {
            testnet: self.testnet,
            regtest: self.regtest,
        }
    }

    /// Data directory for a network with the given suffix.
    pub fn network_data_dir(&self, suffix: &str) -> PathBuf {
        if suffix.is_empty() {
            self.data_dir.clone()
        } else {
            self.data_dir.join(suffix)
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            testnet: false,
            regtest: false,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            data_dir: default_data_dir(),
        }
    }
}
