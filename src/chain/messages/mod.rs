//! Message composers: one pure function per transaction kind, all producing [`Msg`].

pub mod authz;
pub mod bank;
pub mod claim;
pub mod gov;
pub mod ibc;
pub mod lsm;
pub mod memo;
pub mod staking;

use anyhow::{anyhow, Result};
use prost::Message;
use thiserror::Error;

use crate::chain::proto::cosmos::authz::v1beta1::{MsgGrant, MsgRevoke};
use crate::chain::proto::cosmos::bank::v1beta1::MsgSend;
use crate::chain::proto::cosmos::gov::v1::{MsgVote, VoteOption};
use crate::chain::proto::cosmos::staking::v1beta1::{
    MsgDisableTokenizeShares, MsgEnableTokenizeShares, MsgRedeemTokensForShares, MsgTokenizeShares,
};
use crate::chain::proto::ibc::applications::transfer::v1::MsgTransfer;
use crate::chain::proto::quicksilver::interchainstaking::v1::{MsgRequestRedemption, MsgSignalIntent};
use crate::chain::proto::quicksilver::participationrewards::v1::MsgSubmitClaim;
use crate::chain::proto::{Any, Coin};

pub const MSG_SEND_TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_SIGNAL_INTENT_TYPE_URL: &str = "/quicksilver.interchainstaking.v1.MsgSignalIntent";
pub const MSG_REQUEST_REDEMPTION_TYPE_URL: &str = "/quicksilver.interchainstaking.v1.MsgRequestRedemption";
pub const MSG_VOTE_TYPE_URL: &str = "/cosmos.gov.v1.MsgVote";
pub const MSG_SUBMIT_CLAIM_TYPE_URL: &str = "/quicksilver.participationrewards.v1.MsgSubmitClaim";
pub const MSG_GRANT_TYPE_URL: &str = "/cosmos.authz.v1beta1.MsgGrant";
pub const MSG_REVOKE_TYPE_URL: &str = "/cosmos.authz.v1beta1.MsgRevoke";
pub const MSG_TRANSFER_TYPE_URL: &str = "/ibc.applications.transfer.v1.MsgTransfer";
pub const MSG_TOKENIZE_SHARES_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgTokenizeShares";
pub const MSG_REDEEM_TOKENS_FOR_SHARES_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgRedeemTokensForShares";
pub const MSG_DISABLE_TOKENIZE_SHARES_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgDisableTokenizeShares";
pub const MSG_ENABLE_TOKENIZE_SHARES_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgEnableTokenizeShares";

/// Every message kind the pipeline can put in a transaction
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Send(MsgSend),
    SignalIntent(MsgSignalIntent),
    RequestRedemption(MsgRequestRedemption),
    Vote(MsgVote),
    SubmitClaim(MsgSubmitClaim),
    Grant(MsgGrant),
    Revoke(MsgRevoke),
    Transfer(MsgTransfer),
    TokenizeShares(MsgTokenizeShares),
    RedeemTokensForShares(MsgRedeemTokensForShares),
    DisableTokenizeShares(MsgDisableTokenizeShares),
    EnableTokenizeShares(MsgEnableTokenizeShares),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("{type_url}: {field} must not be empty")]
    EmptyField {
        type_url: &'static str,
        field: &'static str,
    },
    #[error("invalid proposal id {0:?}")]
    InvalidProposalId(String),
    #[error("unknown vote option {0:?}")]
    InvalidVoteOption(String),
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
}

impl Msg {
    pub fn type_url(&self) -> &'static str {
        match self {
            Msg::Send(_) => MSG_SEND_TYPE_URL,
            Msg::SignalIntent(_) => MSG_SIGNAL_INTENT_TYPE_URL,
            Msg::RequestRedemption(_) => MSG_REQUEST_REDEMPTION_TYPE_URL,
            Msg::Vote(_) => MSG_VOTE_TYPE_URL,
            Msg::SubmitClaim(_) => MSG_SUBMIT_CLAIM_TYPE_URL,
            Msg::Grant(_) => MSG_GRANT_TYPE_URL,
            Msg::Revoke(_) => MSG_REVOKE_TYPE_URL,
            Msg::Transfer(_) => MSG_TRANSFER_TYPE_URL,
            Msg::TokenizeShares(_) => MSG_TOKENIZE_SHARES_TYPE_URL,
            Msg::RedeemTokensForShares(_) => MSG_REDEEM_TOKENS_FOR_SHARES_TYPE_URL,
            Msg::DisableTokenizeShares(_) => MSG_DISABLE_TOKENIZE_SHARES_TYPE_URL,
            Msg::EnableTokenizeShares(_) => MSG_ENABLE_TOKENIZE_SHARES_TYPE_URL,
        }
    }

    /// Protobuf-encoded payload
    pub fn encode_value(&self) -> Vec<u8> {
        match self {
            Msg::Send(m) => m.encode_to_vec(),
            Msg::SignalIntent(m) => m.encode_to_vec(),
            Msg::RequestRedemption(m) => m.encode_to_vec(),
            Msg::Vote(m) => m.encode_to_vec(),
            Msg::SubmitClaim(m) => m.encode_to_vec(),
            Msg::Grant(m) => m.encode_to_vec(),
            Msg::Revoke(m) => m.encode_to_vec(),
            Msg::Transfer(m) => m.encode_to_vec(),
            Msg::TokenizeShares(m) => m.encode_to_vec(),
            Msg::RedeemTokensForShares(m) => m.encode_to_vec(),
            Msg::DisableTokenizeShares(m) => m.encode_to_vec(),
            Msg::EnableTokenizeShares(m) => m.encode_to_vec(),
        }
    }

    pub fn to_any(&self) -> Any {
        Any {
            type_url: self.type_url().to_string(),
            value: self.encode_value(),
        }
    }

    pub fn from_any(any: &Any) -> Result<Self> {
        let value = &any.value[..];
        let msg = match any.type_url.as_str() {
            MSG_SEND_TYPE_URL => Msg::Send(MsgSend::decode(value)?),
            MSG_SIGNAL_INTENT_TYPE_URL => Msg::SignalIntent(MsgSignalIntent::decode(value)?),
            MSG_REQUEST_REDEMPTION_TYPE_URL => {
                Msg::RequestRedemption(MsgRequestRedemption::decode(value)?)
            }
            MSG_VOTE_TYPE_URL => Msg::Vote(MsgVote::decode(value)?),
            MSG_SUBMIT_CLAIM_TYPE_URL => Msg::SubmitClaim(MsgSubmitClaim::decode(value)?),
            MSG_GRANT_TYPE_URL => Msg::Grant(MsgGrant::decode(value)?),
            MSG_REVOKE_TYPE_URL => Msg::Revoke(MsgRevoke::decode(value)?),
            MSG_TRANSFER_TYPE_URL => Msg::Transfer(MsgTransfer::decode(value)?),
            MSG_TOKENIZE_SHARES_TYPE_URL => Msg::TokenizeShares(MsgTokenizeShares::decode(value)?),
            MSG_REDEEM_TOKENS_FOR_SHARES_TYPE_URL => {
                Msg::RedeemTokensForShares(MsgRedeemTokensForShares::decode(value)?)
            }
            MSG_DISABLE_TOKENIZE_SHARES_TYPE_URL => {
                Msg::DisableTokenizeShares(MsgDisableTokenizeShares::decode(value)?)
            }
            MSG_ENABLE_TOKENIZE_SHARES_TYPE_URL => {
                Msg::EnableTokenizeShares(MsgEnableTokenizeShares::decode(value)?)
            }
            other => return Err(anyhow!("Unsupported message type: {}", other)),
        };
        Ok(msg)
    }

    /// Required-field check. Composers never fail; callers run this before submitting.
    pub fn validate_basic(&self) -> Result<(), ComposeError> {
        let type_url = self.type_url();
        let require = |value: &str, field: &'static str| {
            if value.trim().is_empty() {
                Err(ComposeError::EmptyField { type_url, field })
            } else {
                Ok(())
            }
        };

        match self {
            Msg::Send(m) => {
                require(&m.from_address, "from_address")?;
                require(&m.to_address, "to_address")?;
                if m.amount.is_empty() {
                    return Err(ComposeError::EmptyField { type_url, field: "amount" });
                }
            }
            Msg::SignalIntent(m) => {
                require(&m.chain_id, "chain_id")?;
                require(&m.intents, "intents")?;
                require(&m.from_address, "from_address")?;
            }
            Msg::RequestRedemption(m) => {
                if m.value.is_none() {
                    return Err(ComposeError::EmptyField { type_url, field: "value" });
                }
                require(&m.destination_address, "destination_address")?;
                require(&m.from_address, "from_address")?;
            }
            Msg::Vote(m) => {
                require(&m.voter, "voter")?;
                if m.option() == VoteOption::Unspecified {
                    return Err(ComposeError::EmptyField { type_url, field: "option" });
                }
            }
            Msg::SubmitClaim(m) => {
                require(&m.user_address, "user_address")?;
                require(&m.zone, "zone")?;
                require(&m.src_zone, "src_zone")?;
            }
            Msg::Grant(m) => {
                require(&m.granter, "granter")?;
                require(&m.grantee, "grantee")?;
                if m.grant.as_ref().and_then(|g| g.authorization.as_ref()).is_none() {
                    return Err(ComposeError::EmptyField { type_url, field: "grant.authorization" });
                }
            }
            Msg::Revoke(m) => {
                require(&m.granter, "granter")?;
                require(&m.grantee, "grantee")?;
                require(&m.msg_type_url, "msg_type_url")?;
            }
            Msg::Transfer(m) => {
                require(&m.source_port, "source_port")?;
                require(&m.source_channel, "source_channel")?;
                require(&m.sender, "sender")?;
                require(&m.receiver, "receiver")?;
                if m.token.is_none() {
                    return Err(ComposeError::EmptyField { type_url, field: "token" });
                }
            }
            Msg::TokenizeShares(m) => {
                require(&m.delegator_address, "delegator_address")?;
                require(&m.validator_address, "validator_address")?;
                require(&m.tokenized_share_owner, "tokenized_share_owner")?;
                if m.amount.is_none() {
                    return Err(ComposeError::EmptyField { type_url, field: "amount" });
                }
            }
            Msg::RedeemTokensForShares(m) => {
                require(&m.delegator_address, "delegator_address")?;
                if m.amount.as_ref().map_or(true, |c| c.denom.is_empty()) {
                    return Err(ComposeError::EmptyField { type_url, field: "amount" });
                }
            }
            Msg::DisableTokenizeShares(m) => require(&m.delegator_address, "delegator_address")?,
            Msg::EnableTokenizeShares(m) => require(&m.delegator_address, "delegator_address")?,
        }
        Ok(())
    }
}

pub fn coin(amount: u128, denom: &str) -> Coin {
    Coin {
        denom: denom.to_string(),
        amount: amount.to_string(),
    }
}

pub fn coins(amount: u128, denom: &str) -> Vec<Coin> {
    vec![coin(amount, denom)]
}

/// Parse "1000000uqck" into a coin
pub fn parse_coin(input: &str) -> Result<Coin, ComposeError> {
    let input = input.trim();
    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| ComposeError::InvalidAmount(input.to_string()))?;
    let (amount, denom) = input.split_at(split);
    let amount: u128 = amount
        .parse()
        .map_err(|_| ComposeError::InvalidAmount(input.to_string()))?;
    if denom.is_empty() {
        return Err(ComposeError::InvalidAmount(input.to_string()));
    }
    Ok(coin(amount, denom))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_kinds() -> Vec<Msg> {
        vec![
            bank::send("quick1a", "quick1b", coins(1_000_000, "uqck")),
            staking::signal_intent(
                "cosmoshub-4",
                &[staking::ValidatorIntent::new("cosmosvaloper1x", 1.0)],
                "quick1a",
            ),
            staking::request_redemption(coin(5, "uqatom"), "quick1a", "cosmos1a"),
            gov::vote(42, "quick1a", VoteOption::Yes),
            claim::submit_claim("quick1a", "cosmoshub-4", "osmosis-1", claim::ClaimType::OsmosisPool, vec![]),
            authz::grant_generic("quick1a", "quick1b", MSG_SUBMIT_CLAIM_TYPE_URL),
            authz::revoke("quick1a", "quick1b", MSG_SUBMIT_CLAIM_TYPE_URL),
            ibc::transfer(
                &ibc::TransferParams {
                    source_port: "transfer".into(),
                    source_channel: "channel-0".into(),
                    sender: "quick1a".into(),
                    receiver: "cosmos1a".into(),
                    token: coin(1, "uqck"),
                    timeout_height: None,
                    memo: String::new(),
                },
                1_700_000_000_000,
            ),
            lsm::tokenize_shares("cosmos1a", "cosmosvaloper1x", coin(1_000_000, "uatom")),
            lsm::redeem_tokens_for_shares("cosmos1a", coin(1_000_000, "cosmosvaloper1x/7")),
            lsm::disable_tokenize_shares("cosmos1a"),
            lsm::enable_tokenize_shares("cosmos1a"),
        ]
    }

    #[test]
    fn test_any_round_trip_for_every_kind() {
        for msg in all_kinds() {
            let any = msg.to_any();
            assert_eq!(any.type_url, msg.type_url());
            assert_eq!(Msg::from_any(&any).unwrap(), msg);
            assert!(msg.validate_basic().is_ok(), "{} should validate", msg.type_url());
        }
    }

    #[test]
    fn test_composers_are_deterministic() {
        let a: Vec<Any> = all_kinds().iter().map(Msg::to_any).collect();
        let b: Vec<Any> = all_kinds().iter().map(Msg::to_any).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_type_url() {
        let any = Any { type_url: "/cosmos.staking.v1beta1.MsgDelegate".into(), value: vec![] };
        let err = Msg::from_any(&any).unwrap_err();
        assert!(err.to_string().contains("Unsupported message type"));
    }

    #[test]
    fn test_validate_basic_flags_empty_address() {
        let msg = bank::send("", "quick1b", coins(1, "uqck"));
        assert_eq!(
            msg.validate_basic(),
            Err(ComposeError::EmptyField { type_url: MSG_SEND_TYPE_URL, field: "from_address" })
        );

        let msg = gov::vote(1, "quick1a", VoteOption::Unspecified);
        assert!(msg.validate_basic().is_err());
    }

    #[test]
    fn test_parse_coin() {
        assert_eq!(parse_coin("1000000uqck").unwrap(), coin(1_000_000, "uqck"));
        assert_eq!(
            parse_coin("5ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2").unwrap().denom,
            "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
        );
        assert!(parse_coin("uqck").is_err());
        assert!(parse_coin("100").is_err());
    }
}
