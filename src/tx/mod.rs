//! Transaction submitter: sign, broadcast, report.
//!
//! One call to [`TxContext::tx`] moves through `Idle -> Signing -> Broadcasting ->
//! Succeeded | Failed`. Nothing is retried: simulate, sign and broadcast each run at
//! most once, since resubmitting with a stale fee or sequence can land the same
//! transaction twice.

pub mod error;
pub mod fee;
#[cfg(test)]
pub(crate) mod mock;

use prost::Message;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::chain::messages::{lsm, Msg};
use crate::chain::proto::TxRaw;
use crate::chain::{ChainInfo, SigningClient, TxEvent, WalletConnection};
use crate::notify::{Notifier, Toast, ToastKind};

pub use error::TxError;
pub use fee::{FeeEstimator, StdFee};

const BROADCAST_MESSAGE: &str = "Waiting for transaction to be included in the block";
const CONNECT_WALLET_MESSAGE: &str = "Please connect your wallet";

/// Toast titles for submission outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Failed,
    Successful,
    Broadcasting,
}

impl TxStatus {
    pub fn title(&self) -> &'static str {
        match self {
            TxStatus::Failed => "Transaction Failed",
            TxStatus::Successful => "Transaction Successful",
            TxStatus::Broadcasting => "Transaction Broadcasting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxState {
    Idle,
    Signing,
    Broadcasting,
    Succeeded,
    Failed,
}

/// Replaces parts of the success toast
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOverride {
    pub title: Option<String>,
    pub kind: Option<ToastKind>,
    pub message: Option<String>,
}

#[derive(Default)]
pub struct TxOptions {
    /// Skip estimation and pay this fee
    pub fee: Option<StdFee>,
    pub memo: String,
    pub toast: ToastOverride,
    pub on_success: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl TxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fee(mut self, fee: StdFee) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn success_title(mut self, title: impl Into<String>) -> Self {
        self.toast.title = Some(title.into());
        self
    }

    pub fn on_success(mut self, f: impl FnOnce() + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }
}

/// Terminal outcome of one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Events of the included transaction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TxEvent>,
}

impl TxResult {
    pub fn succeeded(tx_hash: String) -> Self {
        Self {
            success: true,
            tx_hash: Some(tx_hash),
            error: None,
            events: Vec::new(),
        }
    }

    pub fn with_events(mut self, events: Vec<TxEvent>) -> Self {
        self.events = events;
        self
    }

    /// `<validator>/<record id>` denom minted by a tokenize-shares transaction
    pub fn tokenized_share_denom(&self) -> Option<String> {
        lsm::tokenized_share_denom(&self.events)
    }

    pub fn failed(err: &TxError) -> Self {
        Self {
            success: false,
            tx_hash: None,
            error: Some(err.to_string()),
            events: Vec::new(),
        }
    }
}

/// Everything a submission needs, wired up explicitly by the caller
pub struct TxContext {
    wallet: Arc<dyn WalletConnection>,
    notifier: Arc<dyn Notifier>,
    estimator: FeeEstimator,
    chain: ChainInfo,
}

impl TxContext {
    pub fn new(
        chain: ChainInfo,
        estimator: FeeEstimator,
        wallet: Arc<dyn WalletConnection>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            wallet,
            notifier,
            estimator,
            chain,
        }
    }

    /// Connected account, if any. A blank address counts as no wallet.
    pub fn address(&self) -> Option<String> {
        self.wallet.address().filter(|a| !a.trim().is_empty())
    }

    pub fn chain(&self) -> &ChainInfo {
        &self.chain
    }

    pub fn estimator(&self) -> &FeeEstimator {
        &self.estimator
    }

    /// Sign and broadcast `messages` as one transaction
    pub async fn tx(&self, messages: &[Msg], mut options: TxOptions) -> TxResult {
        let mut state = TxState::Idle;

        let Some(address) = self.address() else {
            self.notifier
                .toast(Toast::error(&TxError::WalletNotConnected.to_string(), CONNECT_WALLET_MESSAGE));
            advance(&mut state, TxState::Failed);
            return TxResult::failed(&TxError::WalletNotConnected);
        };

        advance(&mut state, TxState::Signing);
        let (client, signed) = match self.sign(&address, messages, &options).await {
            Ok(signed) => signed,
            Err(err) => {
                error!("Signing failed for {}: {}", address, err);
                self.notifier
                    .toast(Toast::error(TxStatus::Failed.title(), &err.to_string()));
                advance(&mut state, TxState::Failed);
                return TxResult::failed(&err);
            }
        };

        advance(&mut state, TxState::Broadcasting);
        let loading = self
            .notifier
            .toast(Toast::loading(TxStatus::Broadcasting.title(), BROADCAST_MESSAGE));

        let outcome = client.broadcast_tx(signed.encode_to_vec()).await;
        self.notifier.close(loading);

        let err = match outcome {
            Ok(response) if response.is_success() => {
                info!(
                    "Transaction {} included at height {} ({} gas used)",
                    response.tx_hash, response.height, response.gas_used
                );
                if let Some(on_success) = options.on_success.take() {
                    on_success();
                }
                self.notifier.toast(self.success_toast(&response.tx_hash, &options));
                advance(&mut state, TxState::Succeeded);
                return TxResult::succeeded(response.tx_hash).with_events(response.events);
            }
            Ok(response) => TxError::rejected(response.code, &response.raw_log),
            Err(e) => TxError::broadcast(e),
        };

        error!("Transaction failed: {}", err);
        self.notifier
            .toast(Toast::error(TxStatus::Failed.title(), &err.to_string()));
        advance(&mut state, TxState::Failed);
        TxResult::failed(&err)
    }

    /// One signing client per submission: it estimates the fee (unless given) and signs
    async fn sign(
        &self,
        address: &str,
        messages: &[Msg],
        options: &TxOptions,
    ) -> Result<(Arc<dyn SigningClient>, TxRaw), TxError> {
        let client = self.wallet.signing_client().await.map_err(TxError::signing)?;

        let fee = match &options.fee {
            Some(fee) => fee.clone(),
            None => {
                self.estimator
                    .estimate_fee(client.as_ref(), address, messages, &options.memo)
                    .await
            }
        };

        debug!("Signing {} message(s) with fee {:?} / {} gas", messages.len(), fee.amount, fee.gas);
        let signed = client
            .sign(address, messages, &fee, &options.memo)
            .await
            .map_err(TxError::signing)?;

        Ok((client, signed))
    }

    fn success_toast(&self, tx_hash: &str, options: &TxOptions) -> Toast {
        let title = options
            .toast
            .title
            .as_deref()
            .unwrap_or(TxStatus::Successful.title());
        let link = (!self.chain.explorer.is_empty()).then(|| self.chain.explorer_tx_url(tx_hash));

        let toast = Toast::success(title, options.toast.message.clone(), link);
        match options.toast.kind {
            Some(kind) => toast.with_kind(kind),
            None => toast,
        }
    }
}

fn advance(state: &mut TxState, next: TxState) {
    debug!("tx state {:?} -> {:?}", state, next);
    *state = next;
}
