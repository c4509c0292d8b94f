use super::Msg;
use crate::chain::proto::ibc::applications::transfer::v1::MsgTransfer;
use crate::chain::proto::ibc::core::client::v1::Height;
use crate::chain::proto::Coin;

/// How far ahead of "now" an outgoing transfer times out
pub const TRANSFER_TIMEOUT_MS: u64 = 1_200_000;

#[derive(Debug, Clone, PartialEq)]
pub struct TransferParams {
    pub source_port: String,
    pub source_channel: String,
    pub sender: String,
    pub receiver: String,
    pub token: Coin,
    pub timeout_height: Option<Height>,
    pub memo: String,
}

/// Timeout in nanoseconds since the epoch, twenty minutes after `now_ms`
pub fn timeout_timestamp_nanos(now_ms: u64) -> u64 {
    (now_ms + TRANSFER_TIMEOUT_MS) * 1_000_000
}

/// ICS-20 transfer timed out relative to `now_ms`
pub fn transfer(params: &TransferParams, now_ms: u64) -> Msg {
    Msg::Transfer(MsgTransfer {
        source_port: params.source_port.clone(),
        source_channel: params.source_channel.clone(),
        token: Some(params.token.clone()),
        sender: params.sender.clone(),
        receiver: params.receiver.clone(),
        timeout_height: params.timeout_height,
        timeout_timestamp: timeout_timestamp_nanos(now_ms),
        memo: params.memo.clone(),
    })
}

/// [`transfer`] against the wall clock
pub fn transfer_now(params: &TransferParams) -> Msg {
    let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
    transfer(params, now_ms)
}
