use anyhow::{anyhow, bail, Result};
use prost::Message;
use std::time::{Duration, Instant};
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::Code;

use crate::chain::proto::{
    BaseAccount, BroadcastMode, BroadcastTxRequest, BroadcastTxResponse, GetTxRequest,
    GetTxResponse, QueryAccountRequest, QueryAccountResponse, SimulateRequest,
    SimulateResponse, TxResponse,
};
use crate::chain::signing::{DeliverTxResponse, TxEvent};
use crate::chain::tx_builder::tx_hash;

const ACCOUNT_PATH: &str = "/cosmos.auth.v1beta1.Query/Account";
const SIMULATE_PATH: &str = "/cosmos.tx.v1beta1.Service/Simulate";
const BROADCAST_PATH: &str = "/cosmos.tx.v1beta1.Service/BroadcastTx";
const GET_TX_PATH: &str = "/cosmos.tx.v1beta1.Service/GetTx";

const BASE_ACCOUNT_TYPE_URL: &str = "/cosmos.auth.v1beta1.BaseAccount";

/// Configuration for the chain gRPC client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// gRPC endpoint URL (e.g., "https://quicksilver-grpc.polkachu.com:11190")
    pub grpc_endpoint: String,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Maximum retry attempts for read-only queries
    pub max_retries: u32,
    /// Chain ID (e.g., "quicksilver-2")
    pub chain_id: String,
    /// How long to wait for a broadcast transaction to land in a block
    pub broadcast_timeout: Duration,
    /// Delay between inclusion polls
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            grpc_endpoint: "https://quicksilver-2.grpc.quicksilver.zone:443".to_string(),
            connection_timeout: 10,
            request_timeout: 30,
            max_retries: 3,
            chain_id: "quicksilver-2".to_string(),
            broadcast_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_secs(3),
        }
    }
}

/// Account number and sequence needed to sign
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInfo {
    pub address: String,
    pub account_number: u64,
    pub sequence: u64,
}

/// gRPC client for the auth query and tx services
#[derive(Clone)]
pub struct ChainClient {
    config: ClientConfig,
    channel: Option<Channel>,
}

impl ChainClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            channel: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Connect to the gRPC endpoint
    pub async fn connect(&mut self) -> Result<()> {
        log::info!("Connecting to {} at {}", self.config.chain_id, self.config.grpc_endpoint);

        let endpoint = Endpoint::from_shared(self.config.grpc_endpoint.clone())?
            .timeout(Duration::from_secs(self.config.request_timeout))
            .connect_timeout(Duration::from_secs(self.config.connection_timeout));

        let channel = endpoint.connect().await?;
        self.channel = Some(channel);

        log::info!("Connected to {}", self.config.chain_id);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.channel.is_some()
    }

    fn channel(&self) -> Result<Channel> {
        self.channel
            .clone()
            .ok_or_else(|| anyhow!("Client not connected. Call connect() first."))
    }

    /// Issue one unary call against `path`
    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, tonic::Status>
    where
        Req: Message + Send + Sync + 'static,
        Resp: Message + Default + Send + Sync + 'static,
    {
        let channel = self
            .channel()
            .map_err(|e| tonic::Status::unavailable(e.to_string()))?;
        let mut grpc = tonic::client::Grpc::new(channel);
        grpc.ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e)))?;

        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(tonic::Request::new(request), PathAndQuery::from_static(path), codec)
            .await?;
        Ok(response.into_inner())
    }

    /// Query account number and sequence. New accounts report zeros.
    pub async fn query_account(&self, address: &str) -> Result<AccountInfo> {
        let response = self
            .with_retry(|| async {
                self.unary::<_, QueryAccountResponse>(
                    ACCOUNT_PATH,
                    QueryAccountRequest {
                        address: address.to_string(),
                    },
                )
                .await
            })
            .await;

        let response = match response {
            Ok(response) => response,
            Err(status) if status.code() == Code::NotFound => {
                log::info!("Account not found, returning default info for new account: {}", address);
                return Ok(AccountInfo {
                    address: address.to_string(),
                    ..Default::default()
                });
            }
            Err(status) => bail!("Failed to query account: {}", status.message()),
        };

        let account_any = response
            .account
            .ok_or_else(|| anyhow!("Account not found"))?;

        if account_any.type_url != BASE_ACCOUNT_TYPE_URL {
            bail!("Unsupported account type: {}", account_any.type_url);
        }

        let account = BaseAccount::decode(&account_any.value[..])?;
        log::debug!(
            "Account {}: number={}, sequence={}",
            account.address,
            account.account_number,
            account.sequence
        );

        Ok(AccountInfo {
            address: account.address,
            account_number: account.account_number,
            sequence: account.sequence,
        })
    }

    /// Simulate an encoded transaction. `None` when the node returns no gas info.
    pub async fn simulate(&self, tx_bytes: Vec<u8>) -> Result<Option<u64>> {
        let response: SimulateResponse = self
            .unary(SIMULATE_PATH, SimulateRequest { tx_bytes })
            .await
            .map_err(|e| anyhow!("Failed to simulate transaction: {}", e.message()))?;

        Ok(response.gas_info.map(|gas| gas.gas_used))
    }

    /// SYNC-mode broadcast: returns once CheckTx has run
    pub async fn broadcast_sync(&self, tx_bytes: Vec<u8>) -> Result<TxResponse> {
        log::info!("broadcast_sync called with {} bytes", tx_bytes.len());
        let response: BroadcastTxResponse = self
            .unary(
                BROADCAST_PATH,
                BroadcastTxRequest {
                    tx_bytes,
                    mode: BroadcastMode::Sync as i32,
                },
            )
            .await
            .map_err(|e| anyhow!("Failed to broadcast transaction: {}", e.message()))?;

        response
            .tx_response
            .ok_or_else(|| anyhow!("No tx response in broadcast response"))
    }

    /// Look up a transaction by hash. `None` while it is not yet in a block.
    pub async fn get_tx(&self, hash: &str) -> Result<Option<TxResponse>> {
        let result: Result<GetTxResponse, tonic::Status> = self
            .unary(GET_TX_PATH, GetTxRequest { hash: hash.to_string() })
            .await;

        match result {
            Ok(response) => Ok(response.tx_response),
            Err(status) if status.code() == Code::NotFound => Ok(None),
            // Some nodes report a pending hash as InvalidArgument / "tx not found".
            Err(status) if status.message().contains("not found") => Ok(None),
            Err(status) => Err(anyhow!("Failed to query transaction {}: {}", hash, status.message())),
        }
    }

    /// Broadcast and wait until the transaction is included in a block.
    ///
    /// A CheckTx rejection is returned as a delivery result with its non-zero code.
    /// Waiting past `broadcast_timeout` is an error: the transaction may still land.
    pub async fn broadcast_and_confirm(&self, tx_bytes: Vec<u8>) -> Result<DeliverTxResponse> {
        let expected_hash = tx_hash(&tx_bytes);
        let check = self.broadcast_sync(tx_bytes).await?;

        if check.code != 0 {
            log::warn!("Transaction {} rejected by CheckTx: {}", check.txhash, check.raw_log);
            return Ok(DeliverTxResponse::from(check));
        }

        let hash = if check.txhash.is_empty() { expected_hash } else { check.txhash };
        let started = Instant::now();

        loop {
            if let Some(included) = self.get_tx(&hash).await? {
                log::info!("Transaction {} included at height {}", hash, included.height);
                return Ok(DeliverTxResponse::from(included));
            }

            if started.elapsed() >= self.config.broadcast_timeout {
                bail!(
                    "Transaction with ID {} was submitted but was not yet found on the chain. You might want to check later. There was a wait of {} seconds.",
                    hash,
                    self.config.broadcast_timeout.as_secs()
                );
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Retry helper for read-only queries. Never used for simulate or broadcast.
    async fn with_retry<T, F, Fut>(&self, f: F) -> Result<T, tonic::Status>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, tonic::Status>>,
    {
        let mut retries = 0;
        loop {
            match f().await {
                Ok(result) => return Ok(result),
                Err(e) if e.code() == Code::NotFound => return Err(e),
                Err(e) if retries < self.config.max_retries => {
                    retries += 1;
                    log::debug!("Query failed ({}), retry {}/{}", e.message(), retries, self.config.max_retries);
                    tokio::time::sleep(Duration::from_millis(100 * retries as u64)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl From<TxResponse> for DeliverTxResponse {
    fn from(response: TxResponse) -> Self {
        Self {
            code: response.code,
            tx_hash: response.txhash,
            raw_log: response.raw_log,
            height: response.height.max(0) as u64,
            gas_used: response.gas_used.max(0) as u64,
            gas_wanted: response.gas_wanted.max(0) as u64,
            events: response.events.into_iter().map(TxEvent::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::proto::tendermint::abci::{Event, EventAttribute};

    #[test]
    fn test_client_creation() {
        let client = ChainClient::new(ClientConfig::default());
        assert!(!client.is_connected());
        assert_eq!(client.config().chain_id, "quicksilver-2");
        assert_eq!(client.config().broadcast_timeout, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_calls_fail_when_not_connected() {
        let client = ChainClient::new(ClientConfig::default());
        let err = client.simulate(vec![1, 2, 3]).await.unwrap_err();
        assert!(err.to_string().contains("not connected"));

        let err = client.broadcast_sync(vec![]).await.unwrap_err();
        assert!(err.to_string().contains("Failed to broadcast"));
    }

    #[test]
    fn test_tx_response_conversion() {
        let response = TxResponse {
            height: 120,
            txhash: "ABC123".to_string(),
            code: 5,
            raw_log: "insufficient funds".to_string(),
            gas_used: 70_000,
            gas_wanted: 100_000,
            events: vec![Event {
                r#type: "tokenize_shares".to_string(),
                attributes: vec![EventAttribute {
                    key: "share_record_id".to_string(),
                    value: "12".to_string(),
                    index: true,
                }],
            }],
            ..Default::default()
        };
        let delivered = DeliverTxResponse::from(response);
        assert_eq!(delivered.events.len(), 1);
        assert_eq!(delivered.events[0].kind, "tokenize_shares");
        assert_eq!(delivered.events[0].attribute("share_record_id"), Some("12"));
        assert!(!delivered.is_success());
        assert_eq!(delivered.tx_hash, "ABC123");
        assert_eq!(delivered.height, 120);
        assert_eq!(delivered.raw_log, "insufficient funds");
    }
}
