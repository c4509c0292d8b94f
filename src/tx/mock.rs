//! In-memory wallet and signing client with call counters.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::chain::messages::Msg;
use crate::chain::proto::TxRaw;
use crate::chain::{DeliverTxResponse, SigningClient, WalletConnection};
use crate::notify::{Notifier, Toast, ToastHandle, ToastKind};
use crate::tx::fee::StdFee;

pub struct MockSigningClient {
    pub simulation: Result<Option<u64>, String>,
    pub sign_result: Result<(), String>,
    pub broadcast_result: Result<DeliverTxResponse, String>,
    pub simulate_calls: AtomicUsize,
    pub sign_calls: AtomicUsize,
    pub broadcast_calls: AtomicUsize,
    pub signed_fees: Mutex<Vec<StdFee>>,
    pub signed_memos: Mutex<Vec<String>>,
}

impl Default for MockSigningClient {
    fn default() -> Self {
        Self {
            simulation: Ok(Some(100_000)),
            sign_result: Ok(()),
            broadcast_result: Ok(DeliverTxResponse {
                code: 0,
                tx_hash: "ABC123".to_string(),
                height: 10,
                ..Default::default()
            }),
            simulate_calls: AtomicUsize::new(0),
            sign_calls: AtomicUsize::new(0),
            broadcast_calls: AtomicUsize::new(0),
            signed_fees: Mutex::new(Vec::new()),
            signed_memos: Mutex::new(Vec::new()),
        }
    }
}

impl MockSigningClient {
    pub fn with_simulation(mut self, simulation: Result<Option<u64>, String>) -> Self {
        self.simulation = simulation;
        self
    }

    pub fn with_sign_error(mut self, message: &str) -> Self {
        self.sign_result = Err(message.to_string());
        self
    }

    pub fn with_broadcast(mut self, result: Result<DeliverTxResponse, String>) -> Self {
        self.broadcast_result = result;
        self
    }

    pub fn signed_fees(&self) -> Vec<StdFee> {
        self.signed_fees.lock().unwrap().clone()
    }
}

#[async_trait]
impl SigningClient for MockSigningClient {
    async fn simulate(&self, _signer: &str, _messages: &[Msg], _memo: &str) -> Result<Option<u64>> {
        self.simulate_calls.fetch_add(1, Ordering::SeqCst);
        self.simulation.clone().map_err(|e| anyhow!(e))
    }

    async fn sign(&self, _signer: &str, messages: &[Msg], fee: &StdFee, memo: &str) -> Result<TxRaw> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        self.signed_fees.lock().unwrap().push(fee.clone());
        self.signed_memos.lock().unwrap().push(memo.to_string());
        self.sign_result.clone().map_err(|e| anyhow!(e))?;

        Ok(TxRaw {
            body_bytes: messages.iter().flat_map(Msg::encode_value).collect(),
            auth_info_bytes: vec![1],
            signatures: vec![vec![0; 64]],
        })
    }

    async fn broadcast_tx(&self, _tx_bytes: Vec<u8>) -> Result<DeliverTxResponse> {
        self.broadcast_calls.fetch_add(1, Ordering::SeqCst);
        self.broadcast_result.clone().map_err(|e| anyhow!(e))
    }
}

pub struct MockWallet {
    pub address: Option<String>,
    pub client: Arc<MockSigningClient>,
    pub client_calls: AtomicUsize,
}

impl MockWallet {
    pub fn connected(address: &str, client: MockSigningClient) -> Self {
        Self {
            address: Some(address.to_string()),
            client: Arc::new(client),
            client_calls: AtomicUsize::new(0),
        }
    }

    pub fn disconnected(client: MockSigningClient) -> Self {
        Self {
            address: None,
            client: Arc::new(client),
            client_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WalletConnection for MockWallet {
    fn address(&self) -> Option<String> {
        self.address.clone()
    }

    async fn signing_client(&self) -> Result<Arc<dyn SigningClient>> {
        self.client_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.client.clone())
    }
}

/// Keeps every toast and close call, for assertions
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<(ToastHandle, Toast)>>,
    closed: Mutex<Vec<ToastHandle>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|t| t.iter().map(|(_, toast)| toast.clone()).collect())
            .unwrap_or_default()
    }

    pub fn of_kind(&self, kind: ToastKind) -> Vec<Toast> {
        self.toasts().into_iter().filter(|t| t.kind == kind).collect()
    }

    /// Handles of toasts that were shown and have not been closed
    pub fn still_open(&self) -> Vec<ToastHandle> {
        let closed = self.closed.lock().map(|c| c.clone()).unwrap_or_default();
        self.toasts
            .lock()
            .map(|t| {
                t.iter()
                    .filter(|(h, toast)| toast.duration.is_none() && !closed.contains(h))
                    .map(|(h, _)| *h)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn close_count(&self) -> usize {
        self.closed.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl Notifier for RecordingNotifier {
    fn toast(&self, toast: Toast) -> ToastHandle {
        let handle = ToastHandle::new();
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push((handle, toast));
        }
        handle
    }

    fn close(&self, handle: ToastHandle) {
        if let Ok(mut closed) = self.closed.lock() {
            closed.push(handle);
        }
    }
}
