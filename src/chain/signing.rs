/// Wallet-connection seam: the pipeline only ever talks to these traits, so tests and
/// alternative wallets (hardware, remote signer) plug in without touching `tx`.

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use prost::Message;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::chain::client::ChainClient;
use crate::chain::proto::tendermint::abci::Event;
use crate::chain::proto::{Fee, TxRaw};
use crate::chain::tx_builder::TxBuilder;
use crate::chain::wallet::CosmosWallet;
use crate::chain::messages::Msg;
use crate::tx::fee::StdFee;

/// Result of a broadcast once the chain has ruled on the transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverTxResponse {
    pub code: u32,
    pub tx_hash: String,
    pub raw_log: String,
    pub height: u64,
    pub gas_used: u64,
    pub gas_wanted: u64,
    pub events: Vec<TxEvent>,
}

impl DeliverTxResponse {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// ABCI event emitted while executing a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: Vec<(String, String)>,
}

impl TxEvent {
    pub fn new(kind: &str, attributes: &[(&str, &str)]) -> Self {
        Self {
            kind: kind.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// First value recorded under `key`
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Event> for TxEvent {
    fn from(event: Event) -> Self {
        Self {
            kind: event.r#type,
            attributes: event
                .attributes
                .into_iter()
                .map(|a| (a.key, a.value))
                .collect(),
        }
    }
}

/// Signing client bound to one wallet on one chain
#[async_trait]
pub trait SigningClient: Send + Sync {
    /// Dry-run `messages` for `signer`. `Ok(None)` when the node reports no gas usage.
    async fn simulate(&self, signer: &str, messages: &[Msg], memo: &str) -> Result<Option<u64>>;

    async fn sign(&self, signer: &str, messages: &[Msg], fee: &StdFee, memo: &str) -> Result<TxRaw>;

    async fn broadcast_tx(&self, tx_bytes: Vec<u8>) -> Result<DeliverTxResponse>;
}

/// The connected-wallet provider
#[async_trait]
pub trait WalletConnection: Send + Sync {
    /// Address of the connected account, `None` when no wallet is connected
    fn address(&self) -> Option<String>;

    async fn signing_client(&self) -> Result<Arc<dyn SigningClient>>;
}

/// Signs locally with a mnemonic-derived key and talks to the chain over gRPC
pub struct DirectSigningClient {
    client: ChainClient,
    wallet: Arc<CosmosWallet>,
}

impl DirectSigningClient {
    pub fn new(client: ChainClient, wallet: Arc<CosmosWallet>) -> Self {
        Self { client, wallet }
    }

    fn check_signer(&self, signer: &str) -> Result<()> {
        if signer != self.wallet.address {
            bail!(
                "Signer {} does not match connected account {}",
                signer,
                self.wallet.address
            );
        }
        Ok(())
    }

    async fn builder(&self, signer: &str) -> Result<TxBuilder<'_>> {
        let account = self.client.query_account(signer).await?;
        Ok(TxBuilder::new(
            self.client.config().chain_id.clone(),
            account.account_number,
            account.sequence,
            &self.wallet,
        ))
    }
}

#[async_trait]
impl SigningClient for DirectSigningClient {
    async fn simulate(&self, signer: &str, messages: &[Msg], memo: &str) -> Result<Option<u64>> {
        self.check_signer(signer)?;
        let anys = messages.iter().map(Msg::to_any).collect();
        let tx = self.builder(signer).await?.build_for_simulation(anys, memo)?;
        self.client.simulate(tx.encode_to_vec()).await
    }

    async fn sign(&self, signer: &str, messages: &[Msg], fee: &StdFee, memo: &str) -> Result<TxRaw> {
        self.check_signer(signer)?;
        let anys = messages.iter().map(Msg::to_any).collect();
        let fee: Fee = fee.into();
        self.builder(signer).await?.build_signed(anys, fee, memo)
    }

    async fn broadcast_tx(&self, tx_bytes: Vec<u8>) -> Result<DeliverTxResponse> {
        self.client.broadcast_and_confirm(tx_bytes).await
    }
}

/// A wallet connection backed by a local key
pub struct LocalWalletConnection {
    signing_client: Arc<DirectSigningClient>,
    address: String,
}

impl LocalWalletConnection {
    pub fn new(client: ChainClient, wallet: CosmosWallet) -> Self {
        let address = wallet.address.clone();
        Self {
            signing_client: Arc::new(DirectSigningClient::new(client, Arc::new(wallet))),
            address,
        }
    }
}

#[async_trait]
impl WalletConnection for LocalWalletConnection {
    fn address(&self) -> Option<String> {
        Some(self.address.clone())
    }

    async fn signing_client(&self) -> Result<Arc<dyn SigningClient>> {
        Ok(self.signing_client.clone())
    }
}

/// No wallet connected
pub struct Disconnected;

#[async_trait]
impl WalletConnection for Disconnected {
    fn address(&self) -> Option<String> {
        None
    }

    async fn signing_client(&self) -> Result<Arc<dyn SigningClient>> {
        Err(anyhow!("Wallet not connected"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::client::ClientConfig;
    use crate::chain::messages::bank;
    use crate::chain::proto::tendermint::abci::EventAttribute;
    use crate::chain::proto::Coin;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_deliver_success_predicate() {
        let ok = DeliverTxResponse { code: 0, tx_hash: "H".into(), ..Default::default() };
        let failed = DeliverTxResponse { code: 11, raw_log: "out of gas".into(), ..Default::default() };
        assert!(ok.is_success());
        assert!(!failed.is_success());
    }

    #[test]
    fn test_event_from_abci() {
        let event = Event {
            r#type: "tokenize_shares".into(),
            attributes: vec![
                EventAttribute { key: "validator".into(), value: "cosmosvaloper1abc".into(), index: true },
                EventAttribute { key: "share_record_id".into(), value: "7".into(), index: true },
            ],
        };
        let event = TxEvent::from(event);
        assert_eq!(event, TxEvent::new("tokenize_shares", &[("validator", "cosmosvaloper1abc"), ("share_record_id", "7")]));
        assert_eq!(event.attribute("share_record_id"), Some("7"));
        assert_eq!(event.attribute("amount"), None);
    }

    #[tokio::test]
    async fn test_disconnected_wallet() {
        let wallet = Disconnected;
        assert!(wallet.address().is_none());
        assert!(wallet.signing_client().await.is_err());
    }

    #[tokio::test]
    async fn test_local_wallet_rejects_foreign_signer() {
        let wallet = CosmosWallet::quicksilver(MNEMONIC).unwrap();
        let connection = LocalWalletConnection::new(ChainClient::new(ClientConfig::default()), wallet);
        assert!(connection.address().unwrap().starts_with("quick1"));

        let client = connection.signing_client().await.unwrap();
        let msg = bank::send("quick1other", "quick1dest", vec![Coin { denom: "uqck".into(), amount: "1".into() }]);
        let fee = StdFee::new("uqck", 5000, 500_000);

        let err = client.sign("quick1other", &[msg], &fee, "").await.unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }
}
