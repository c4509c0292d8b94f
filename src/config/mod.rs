use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chain::{ChainInfo, ChainRegistry, ClientConfig};

/// Environment variable holding the signing mnemonic
pub const MNEMONIC_ENV: &str = "QS_MNEMONIC";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub chain: ChainConfig,
    #[serde(default)]
    pub tx: TxConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain_name: String,
    pub chain_id: String,
    pub grpc_endpoint: String,
    pub bech32_prefix: String,
    pub fee_denom: String,
    /// Omit to always pay the default fee
    #[serde(default)]
    pub gas_price: Option<f64>,
    /// Explorer transaction URL, `{}` is replaced by the hash
    pub explorer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxConfig {
    // Multiplier on simulated gas. 1.0 uses the simulation result as is.
    pub gas_adjustment: f64,
    pub default_fee_amount: u64,
    pub default_gas: u64,
    pub broadcast_timeout_secs: u64,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub connection_timeout_secs: u64,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            gas_adjustment: 1.0,
            default_fee_amount: 5000,
            default_gas: 500_000,
            broadcast_timeout_secs: 60,
            poll_interval_secs: 3,
            request_timeout_secs: 30,
            connection_timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chain: ChainConfig {
                chain_name: "quicksilver".to_string(),
                chain_id: "quicksilver-2".to_string(),
                grpc_endpoint: "https://quicksilver-2.grpc.quicksilver.zone:443".to_string(),
                bech32_prefix: "quick".to_string(),
                fee_denom: "uqck".to_string(),
                gas_price: Some(0.0001),
                explorer: "https://explorer.quicksilver.zone/tx/{}".to_string(),
            },
            tx: TxConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Config seeded from a registry entry; grpc falls back to the default endpoint
    pub fn for_chain(registry: &ChainRegistry, chain_name: &str) -> Result<Self> {
        let info = registry
            .get(chain_name)
            .ok_or_else(|| anyhow!("Unknown chain: {}", chain_name))?;
        let defaults = Self::default();

        Ok(Self {
            chain: ChainConfig {
                chain_name: info.chain_name.clone(),
                chain_id: info.chain_id.clone(),
                grpc_endpoint: info.grpc.clone().unwrap_or(defaults.chain.grpc_endpoint),
                bech32_prefix: info.bech32_prefix.clone(),
                fee_denom: info.fee_denom.clone(),
                gas_price: info.gas_price,
                explorer: info.explorer.clone(),
            },
            tx: defaults.tx,
        })
    }

    pub fn chain_info(&self) -> ChainInfo {
        let chain = &self.chain;
        ChainInfo {
            chain_name: chain.chain_name.clone(),
            chain_id: chain.chain_id.clone(),
            pretty_name: chain.chain_name.clone(),
            bech32_prefix: chain.bech32_prefix.clone(),
            fee_denom: chain.fee_denom.clone(),
            gas_price: chain.gas_price,
            grpc: Some(chain.grpc_endpoint.clone()),
            rest: None,
            explorer: chain.explorer.clone(),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            grpc_endpoint: self.chain.grpc_endpoint.clone(),
            connection_timeout: self.tx.connection_timeout_secs,
            request_timeout: self.tx.request_timeout_secs,
            max_retries: 3,
            chain_id: self.chain.chain_id.clone(),
            broadcast_timeout: Duration::from_secs(self.tx.broadcast_timeout_secs),
            poll_interval: Duration::from_secs(self.tx.poll_interval_secs),
        }
    }
}

/// Per-user config location, e.g. `~/.config/quicksilver-tx/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quicksilver-tx").join("config.toml"))
}

/// The given path if it exists, else the per-user config if that exists, else the given path
pub fn resolve_config_path(path: &str) -> PathBuf {
    let given = PathBuf::from(path);
    if given.exists() {
        return given;
    }
    match user_config_path() {
        Some(user) if user.exists() => user,
        _ => given,
    }
}
