//! Liquid staking module (LSM) messages: turning a delegation into a transferable
//! share token and back, plus the per-account tokenize lock.

use super::Msg;
use crate::chain::proto::cosmos::staking::v1beta1::{
    MsgDisableTokenizeShares, MsgEnableTokenizeShares, MsgRedeemTokensForShares, MsgTokenizeShares,
};
use crate::chain::proto::Coin;
use crate::chain::signing::TxEvent;

pub const TOKENIZE_SHARES_EVENT: &str = "tokenize_shares";

/// Tokenize `amount` of the delegation to `validator_address`, owned by the delegator
pub fn tokenize_shares(delegator_address: &str, validator_address: &str, amount: Coin) -> Msg {
    Msg::TokenizeShares(MsgTokenizeShares {
        delegator_address: delegator_address.to_string(),
        validator_address: validator_address.to_string(),
        amount: Some(amount),
        tokenized_share_owner: delegator_address.to_string(),
    })
}

/// Redeem share tokens (`<valoper>/<record id>` denom) back into a delegation
pub fn redeem_tokens_for_shares(delegator_address: &str, amount: Coin) -> Msg {
    Msg::RedeemTokensForShares(MsgRedeemTokensForShares {
        delegator_address: delegator_address.to_string(),
        amount: Some(amount),
    })
}

/// Lock the account against tokenizing its delegations
pub fn disable_tokenize_shares(delegator_address: &str) -> Msg {
    Msg::DisableTokenizeShares(MsgDisableTokenizeShares {
        delegator_address: delegator_address.to_string(),
    })
}

/// Start the unlock period for tokenizing
pub fn enable_tokenize_shares(delegator_address: &str) -> Msg {
    Msg::EnableTokenizeShares(MsgEnableTokenizeShares {
        delegator_address: delegator_address.to_string(),
    })
}

/// Share token denom minted by a tokenize transaction, read from its
/// `tokenize_shares` event as `<validator>/<share_record_id>`.
pub fn tokenized_share_denom(events: &[TxEvent]) -> Option<String> {
    let event = events.iter().find(|e| e.kind == TOKENIZE_SHARES_EVENT)?;
    let validator = event.attribute("validator").filter(|v| !v.is_empty())?;
    let record_id = event.attribute("share_record_id").filter(|v| !v.is_empty())?;
    Some(format!("{}/{}", validator, record_id))
}
