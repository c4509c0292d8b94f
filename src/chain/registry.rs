/// Per-chain metadata: fee token, gas price, address prefix, endpoints and the block
/// explorer transaction URL template (`{}` is replaced by the transaction hash).

use anyhow::{anyhow, Result};
use reqwest::ClientBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub chain_name: String,
    pub chain_id: String,
    pub pretty_name: String,
    pub bech32_prefix: String,
    pub fee_denom: String,
    /// Average gas price in `fee_denom`; `None` forces the default fee
    #[serde(default)]
    pub gas_price: Option<f64>,
    #[serde(default)]
    pub grpc: Option<String>,
    #[serde(default)]
    pub rest: Option<String>,
    pub explorer: String,
}

impl ChainInfo {
    /// Explorer deep link for a transaction hash
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        self.explorer.replace("{}", tx_hash)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: BTreeMap<String, ChainInfo>,
}

impl ChainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with Quicksilver and the zones the dashboard lists
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for chain in builtin_chains() {
            registry.insert(chain);
        }
        registry
    }

    /// Add or replace a chain, keyed by chain name
    pub fn insert(&mut self, chain: ChainInfo) {
        self.chains.insert(chain.chain_name.clone(), chain);
    }

    pub fn get(&self, chain_name: &str) -> Option<&ChainInfo> {
        self.chains.get(chain_name)
    }

    pub fn by_chain_id(&self, chain_id: &str) -> Option<&ChainInfo> {
        self.chains.values().find(|c| c.chain_id == chain_id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    /// Fetch a cosmos chain-registry `chain.json` and convert it
    pub async fn fetch_chain_json(url: &str, timeout_secs: u64) -> Result<ChainInfo> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        tracing::debug!("Fetching chain registry entry from {}", url);
        let response = client.get(url).send().await?.error_for_status()?;
        let entry: RegistryChainJson = response.json().await?;
        entry.try_into()
    }
}

/// Subset of the chain-registry `chain.json` schema
#[derive(Debug, Deserialize)]
struct RegistryChainJson {
    chain_name: String,
    chain_id: String,
    #[serde(default)]
    pretty_name: Option<String>,
    bech32_prefix: String,
    #[serde(default)]
    fees: Option<RegistryFees>,
    #[serde(default)]
    apis: Option<RegistryApis>,
    #[serde(default)]
    explorers: Vec<RegistryExplorer>,
}

#[derive(Debug, Deserialize)]
struct RegistryFees {
    #[serde(default)]
    fee_tokens: Vec<RegistryFeeToken>,
}

#[derive(Debug, Deserialize)]
struct RegistryFeeToken {
    denom: String,
    #[serde(default)]
    average_gas_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RegistryApis {
    #[serde(default)]
    grpc: Vec<RegistryEndpoint>,
    #[serde(default)]
    rest: Vec<RegistryEndpoint>,
}

#[derive(Debug, Deserialize)]
struct RegistryEndpoint {
    address: String,
}

#[derive(Debug, Deserialize)]
struct RegistryExplorer {
    #[serde(default)]
    tx_page: Option<String>,
}

impl TryFrom<RegistryChainJson> for ChainInfo {
    type Error = anyhow::Error;

    fn try_from(entry: RegistryChainJson) -> Result<Self> {
        let fee_token = entry
            .fees
            .and_then(|f| f.fee_tokens.into_iter().next())
            .ok_or_else(|| anyhow!("Chain {} lists no fee tokens", entry.chain_name))?;

        let explorer = entry
            .explorers
            .into_iter()
            .find_map(|e| e.tx_page)
            .map(|page| page.replace("${txHash}", "{}"))
            .unwrap_or_default();

        let (grpc, rest) = match entry.apis {
            Some(apis) => (
                apis.grpc.into_iter().next().map(|e| e.address),
                apis.rest.into_iter().next().map(|e| e.address),
            ),
            None => (None, None),
        };

        Ok(ChainInfo {
            pretty_name: entry.pretty_name.unwrap_or_else(|| entry.chain_name.clone()),
            chain_name: entry.chain_name,
            chain_id: entry.chain_id,
            bech32_prefix: entry.bech32_prefix,
            fee_denom: fee_token.denom,
            gas_price: fee_token.average_gas_price,
            grpc,
            rest,
            explorer,
        })
    }
}

fn chain(
    chain_name: &str,
    chain_id: &str,
    pretty_name: &str,
    prefix: &str,
    fee_denom: &str,
    gas_price: f64,
    rest: &str,
    explorer: &str,
) -> ChainInfo {
    ChainInfo {
        chain_name: chain_name.to_string(),
        chain_id: chain_id.to_string(),
        pretty_name: pretty_name.to_string(),
        bech32_prefix: prefix.to_string(),
        fee_denom: fee_denom.to_string(),
        gas_price: Some(gas_price),
        grpc: None,
        rest: Some(rest.to_string()),
        explorer: explorer.to_string(),
    }
}

fn builtin_chains() -> Vec<ChainInfo> {
    vec![
        chain(
            "quicksilver",
            "quicksilver-2",
            "Quicksilver",
            "quick",
            "uqck",
            0.0001,
            "https://quicksilver-2.lcd.quicksilver.zone",
            "https://explorer.quicksilver.zone/tx/{}",
        ),
        chain(
            "quicksilver-testnet",
            "rhye-3",
            "Quicksilver",
            "quick",
            "uqck",
            0.0001,
            "https://rhye-3.lcd.quicksilver.zone",
            "https://testnet.quicksilver.explorers.guru/transaction/{}",
        ),
        chain(
            "cosmoshub",
            "cosmoshub-4",
            "Cosmos",
            "cosmos",
            "uatom",
            0.025,
            "https://cosmoshub-4.lcd.quicksilver.zone",
            "https://mintscan.io/cosmos/tx/{}",
        ),
        chain(
            "osmosis",
            "osmosis-1",
            "Osmosis",
            "osmo",
            "uosmo",
            0.025,
            "https://osmosis-1.lcd.quicksilver.zone",
            "https://mintscan.io/osmosis/tx/{}",
        ),
        chain(
            "stargaze",
            "stargaze-1",
            "Stargaze",
            "stars",
            "ustars",
            1.0,
            "https://stargaze-1.lcd.quicksilver.zone",
            "https://www.mintscan.io/stargaze/tx/{}",
        ),
        chain(
            "juno",
            "juno-1",
            "Juno",
            "juno",
            "ujuno",
            0.075,
            "https://juno-1.lcd.quicksilver.zone",
            "https://www.mintscan.io/juno/tx/{}",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = ChainRegistry::builtin();
        let qck = registry.get("quicksilver").unwrap();
        assert_eq!(qck.chain_id, "quicksilver-2");
        assert_eq!(qck.fee_denom, "uqck");
        assert_eq!(registry.by_chain_id("rhye-3").unwrap().chain_name, "quicksilver-testnet");
        assert!(registry.get("terra").is_none());
    }

    #[test]
    fn test_explorer_link() {
        let registry = ChainRegistry::builtin();
        let url = registry.get("quicksilver").unwrap().explorer_tx_url("ABC123");
        assert_eq!(url, "https://explorer.quicksilver.zone/tx/ABC123");
    }

    #[test]
    fn test_chain_json_conversion() {
        let json = r#"{
            "chain_name": "osmosis",
            "chain_id": "osmosis-1",
            "pretty_name": "Osmosis",
            "bech32_prefix": "osmo",
            "fees": { "fee_tokens": [ { "denom": "uosmo", "average_gas_price": 0.025 } ] },
            "apis": { "grpc": [ { "address": "osmosis-grpc.example:443" } ], "rest": [] },
            "explorers": [ { "kind": "mintscan", "tx_page": "https://www.mintscan.io/osmosis/txs/${txHash}" } ]
        }"#;
        let entry: RegistryChainJson = serde_json::from_str(json).unwrap();
        let info = ChainInfo::try_from(entry).unwrap();

        assert_eq!(info.fee_denom, "uosmo");
        assert_eq!(info.gas_price, Some(0.025));
        assert_eq!(info.grpc.as_deref(), Some("osmosis-grpc.example:443"));
        assert_eq!(info.rest, None);
        assert_eq!(info.explorer_tx_url("FF"), "https://www.mintscan.io/osmosis/txs/FF");
    }

    #[test]
    fn test_chain_json_without_fee_token() {
        let json = r#"{ "chain_name": "x", "chain_id": "x-1", "bech32_prefix": "x" }"#;
        let entry: RegistryChainJson = serde_json::from_str(json).unwrap();
        assert!(ChainInfo::try_from(entry).is_err());
    }
}
