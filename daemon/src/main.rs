//! Rev daemon: selects the network and verifies the chain parameters
//! before anything else is allowed to start.

mod config;

use anyhow::Context;
use clap::Parser;
use rev_chainparams::{select_network, ChainParamsRegistry};
use rev_utils::LogFormat;
use std::path::PathBuf;

use crate::config::DaemonConfig;

#[derive(Parser)]
#[command(name = "rev-daemon", about = "Rev node daemon")]
struct Cli {
    /// Use the public test network.
    #[arg(long, env = "REV_TESTNET")]
    testnet: bool,

    /// Use the local regression-test network.
    #[arg(long, env = "REV_REGTEST")]
    regtest: bool,

    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "REV_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "REV_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "REV_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Base data directory.
    #[arg(long, env = "REV_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the selected network's parameters as JSON.
    Params,
    /// Rebuild and verify every network's genesis block.
    Verify,
    /// Print the resolved configuration as TOML.
    Config,
}

impl Cli {
    /// Layer flags over the file configuration. Network flags are OR'd.
    fn resolve(&self) -> anyhow::Result<DaemonConfig> {
        let mut config = match &self.config {
            Some(path) => DaemonConfig::from_toml_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => DaemonConfig::default(),
        };
        config.testnet |= self.testnet;
        config.regtest |= self.regtest;
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        Ok(config)
    }
}

/// Nothing may run on top of unverified parameters.
fn verified_registry() -> anyhow::Result<ChainParamsRegistry> {
    ChainParamsRegistry::build_default().context("chain parameter verification failed")
}

/// Execute `command` against an already verified registry and return what
/// to print.
fn run(
    command: &Command,
    config: &DaemonConfig,
    mut registry: ChainParamsRegistry,
) -> anyhow::Result<String> {
    let output = match command {
        Command::Params => {
            let network = select_network(&mut registry, config.network_flags())
                .context("network selection")?;
            let params = registry.current();
            tracing::info!(
                %network,
                data_dir = %config.network_data_dir(params.data_dir_suffix()).display(),
                "network ready"
            );
            serde_json::to_string_pretty(params)? + "\n"
        }
        Command::Verify => registry
            .iter()
            .map(|params| {
                format!(
                    "{:<8} {} merkle {}\n",
                    params.network().as_str(),
                    params.genesis_hash(),
                    params.genesis_block().header.merkle_root
                )
            })
            .collect(),
        Command::Config => config.to_toml_string()?,
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve()?;
    rev_utils::init_logging(config.log_format, &config.log_level);

    let registry = verified_registry()?;
    print!("{}", run(&cli.command, &config, registry)?);
    Ok(())
}
